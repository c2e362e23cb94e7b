use std::ops::Deref;

use http_body_util::BodyExt;
use hyper::body::{Bytes, Incoming};
use serde::Deserialize;

use crate::server::error::{self, ServerError};

const BODY_LIMIT: usize = 1024 * 64;

pub struct Request(pub hyper::Request<Incoming>);

impl From<hyper::Request<Incoming>> for Request {
    fn from(req: hyper::Request<Incoming>) -> Self {
        Request(req)
    }
}

impl Deref for Request {
    type Target = hyper::Request<Incoming>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Request {
    pub async fn get_body(self) -> Result<FullRequest, ServerError> {
        let (parts, body) = self.0.into_parts();
        let body_bytes = http_body_util::Limited::new(body, BODY_LIMIT);

        let bytes = body_bytes
            .collect()
            .await
            .map(|r| r.to_bytes())
            .map_err(|_| error::body_too_large())?;

        let req = hyper::Request::from_parts(parts, bytes);
        Ok(FullRequest(req))
    }
}

pub struct FullRequest(pub hyper::Request<Bytes>);

impl Deref for FullRequest {
    type Target = hyper::Request<Bytes>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FullRequest {
    pub fn text(&self) -> Result<&str, ServerError> {
        std::str::from_utf8(self.body()).map_err(|_| error::body_not_utf8())
    }

    pub fn get_form_data<'a, T>(&'a self) -> Result<T, ServerError>
    where
        T: Deserialize<'a>,
    {
        Ok(serde_html_form::from_str(self.text()?)?)
    }
}
