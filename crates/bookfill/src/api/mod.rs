use reqwest::Url;
use serde::de::DeserializeOwned;

pub(crate) mod google_books;

use crate::{Error, ErrorKind};

/// A HTTP client able to fetch a JSON document and deserialize it.
///
/// The futures returned are not required to be `Send` so the same implementation can be driven
/// by a browser event loop.
#[allow(async_fn_in_trait)]
pub trait Client
where
    Self: Default,
{
    /// GET the `url` and deserialize the response body as JSON.
    ///
    /// # Errors
    ///
    /// An [`Err`] with [`ErrorKind::IO`] is returned when the request cannot be sent or the
    /// connection fails. The response status is not checked.
    /// An [`Err`] with [`ErrorKind::Deserialize`] is returned when the body is not the expected
    /// JSON document.
    async fn get_json<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::Client {
    async fn get_json<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        // The status is not checked: an error reply with a JSON body, such as a quota error,
        // reads as a document without volumes.
        let resp = self
            .get(url)
            .send()
            .await
            .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

        resp.json()
            .await
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
    }
}

#[cfg(test)]
pub(crate) use test::{
    impl_text_producer, EmptyItemsProducer, MockJsonClient, NetworkErrorProducer, Producer,
    UnreachableProducer, YieldingJsonClient,
};

#[cfg(test)]
mod test {
    use std::{
        future::Future,
        pin::Pin,
        task::{Context, Poll},
    };

    use super::*;

    pub(crate) trait Producer<T>
    where
        Self: Default,
    {
        fn produce() -> Result<T, Error>;
    }

    fn deserialize<T, P>() -> Result<T, Error>
    where
        T: DeserializeOwned,
        P: Producer<String>,
    {
        P::produce().and_then(|s| {
            serde_json::from_str(&s).map_err(|e| Error::wrap(ErrorKind::Deserialize, e))
        })
    }

    #[derive(Default)]
    pub(crate) struct MockJsonClient<P: Producer<String>>(std::marker::PhantomData<P>);

    impl<P: Producer<String>> Client for MockJsonClient<P> {
        async fn get_json<T>(&self, _: Url) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            deserialize::<T, P>()
        }
    }

    /// Suspends once before answering, so a second lookup can start while the first is pending.
    #[derive(Default)]
    pub(crate) struct YieldingJsonClient<P: Producer<String>>(std::marker::PhantomData<P>);

    impl<P: Producer<String>> Client for YieldingJsonClient<P> {
        async fn get_json<T>(&self, _: Url) -> Result<T, Error>
        where
            T: DeserializeOwned,
        {
            YieldNow(false).await;
            deserialize::<T, P>()
        }
    }

    struct YieldNow(bool);

    impl Future for YieldNow {
        type Output = ();

        fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            if self.0 {
                Poll::Ready(())
            } else {
                self.0 = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    macro_rules! impl_text_producer {
        ($($producer:ident => $exp:expr,)*) => {
            $(
                #[derive(Default)]
                pub(crate) struct $producer;

                impl crate::api::Producer<String> for $producer {
                    fn produce() -> Result<String, crate::Error> {
                        $exp
                    }
                }
            )*
        };
    }
    impl_text_producer! {
        NetworkErrorProducer => Err(Error::new(ErrorKind::IO, "Network error")),
        EmptyItemsProducer => Ok(include_str!("../../tests/data/google_books_empty.json").to_owned()),
        UnreachableProducer => panic!("no request should have been made"),
    }

    pub(crate) use impl_text_producer;
}
