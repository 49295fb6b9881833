use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Form,
};
use serde::de::DeserializeOwned;

/// Parameter sets that can be combined from several request sources
pub trait MergeParams {
    /// Fill fields missing from `self` with the values in `other`
    fn merge(self, other: Self) -> Self;
}

/// Request parameters read from the query string and, for
/// `application/x-www-form-urlencoded` requests, from the body
///
/// Query values win when a field appears in both.
#[derive(Debug)]
pub struct QueryOrForm<T>(pub T);

fn is_form_request(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/x-www-form-urlencoded"))
        .unwrap_or(false)
}

#[async_trait]
impl<S, T> FromRequest<S> for QueryOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + MergeParams + Send,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let Query(from_query) = Query::<T>::from_request_parts(&mut parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !is_form_request(&parts.headers) {
            return Ok(Self(from_query));
        }

        let req = Request::from_parts(parts, body);
        let Form(from_body) = Form::<T>::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self(from_query.merge(from_body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Params {
        a: Option<String>,
        b: Option<String>,
    }

    impl MergeParams for Params {
        fn merge(self, other: Self) -> Self {
            Self {
                a: self.a.or(other.a),
                b: self.b.or(other.b),
            }
        }
    }

    async fn extract(uri: &str, content_type: Option<&str>, body: &str) -> Option<Params> {
        let mut builder = Request::builder().method(Method::POST).uri(uri);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body.to_string())).unwrap();

        QueryOrForm::<Params>::from_request(req, &())
            .await
            .ok()
            .map(|QueryOrForm(params)| params)
    }

    #[tokio::test]
    async fn test_query_only() {
        let params = extract("/x?a=1", None, "").await.unwrap();

        assert_eq!(params.a.as_deref(), Some("1"));
        assert_eq!(params.b, None);
    }

    #[tokio::test]
    async fn test_form_body_fills_missing_fields() {
        let params = extract(
            "/x?a=query",
            Some("application/x-www-form-urlencoded"),
            "a=body&b=2",
        )
        .await
        .unwrap();

        assert_eq!(params.a.as_deref(), Some("query"));
        assert_eq!(params.b.as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn test_non_form_body_ignored() {
        let params = extract("/x", Some("application/json"), r#"{"a":"1"}"#)
            .await
            .unwrap();

        assert_eq!(params.a, None);
    }

    #[tokio::test]
    async fn test_malformed_query_rejected() {
        #[derive(Debug, Deserialize)]
        struct Numeric {
            #[allow(dead_code)]
            n: Option<i64>,
        }

        impl MergeParams for Numeric {
            fn merge(self, _other: Self) -> Self {
                self
            }
        }

        let req = Request::builder()
            .uri("/x?n=abc")
            .body(Body::empty())
            .unwrap();
        let rejection = QueryOrForm::<Numeric>::from_request(req, &())
            .await
            .unwrap_err();

        assert_eq!(rejection.status(), StatusCode::BAD_REQUEST);
    }
}
