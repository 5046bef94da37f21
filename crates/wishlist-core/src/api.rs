//! Wish REST Client
//!
//! Typed bindings to the `/wishes` collection of a json-server style backend.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::IgnoredAny;

use crate::config::ApiConfig;
use crate::domain::{NewWish, Wish, WishFormData, WishId};
use crate::error::ApiResult;
use crate::http::{HttpExecutor, HttpRequest, RequestStatus, Transport};
use crate::observe::Listeners;

/// Characters escaped when an id is placed in a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub struct WishApi<T> {
    executor: HttpExecutor<T>,
    config: ApiConfig,
}

impl<T: Transport> WishApi<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self::with_listeners(transport, config, Listeners::new())
    }

    pub fn with_listeners(transport: T, config: ApiConfig, listeners: Listeners) -> Self {
        Self {
            executor: HttpExecutor::with_listeners(transport, listeners),
            config,
        }
    }

    /// `GET /wishes`
    pub async fn list(&self) -> ApiResult<Vec<Wish>> {
        self.executor
            .execute(HttpRequest::get(self.config.collection_url()))
            .await
    }

    /// `POST /wishes`, returns the wish as the backend stored it
    pub async fn create(&self, wish: &NewWish) -> ApiResult<Wish> {
        let request = HttpRequest::post(self.config.collection_url(), wish)?;
        self.executor.execute(request).await
    }

    /// `PATCH /wishes/{id}` with the editable fields
    pub async fn update(&self, id: &WishId, fields: &WishFormData) -> ApiResult<Wish> {
        let request = HttpRequest::patch(self.item_url(id), fields)?;
        self.executor.execute(request).await
    }

    /// `DELETE /wishes/{id}`; whatever body comes back is ignored
    pub async fn delete(&self, id: &WishId) -> ApiResult<()> {
        self.executor
            .execute::<IgnoredAny>(HttpRequest::delete(self.item_url(id)))
            .await?;
        Ok(())
    }
}

impl<T> WishApi<T> {
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn executor(&self) -> &HttpExecutor<T> {
        &self.executor
    }

    pub fn status(&self) -> RequestStatus {
        self.executor.status()
    }

    pub fn item_url(&self, id: &WishId) -> String {
        format!(
            "{}/{}",
            self.config.collection_url(),
            utf8_percent_encode(id.as_str(), PATH_SEGMENT)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::http::testing::FakeTransport;
    use chrono::{TimeZone, Utc};
    use reqwest::Method;
    use serde_json::json;

    fn api(transport: &FakeTransport) -> WishApi<FakeTransport> {
        WishApi::new(transport.clone(), ApiConfig::new("http://localhost:3001"))
    }

    fn wish_json(id: &str, price: f64) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Kettle",
            "description": "Gooseneck",
            "price": price,
            "imageUrl": "https://img.test/kettle.jpg",
            "createdAt": "2026-04-01T08:00:00.000Z"
        })
    }

    #[test]
    fn test_item_url_escapes_id() {
        let transport = FakeTransport::new();
        let api = api(&transport);
        assert_eq!(api.item_url(&WishId::new("42")), "http://localhost:3001/wishes/42");
        assert_eq!(
            api.item_url(&WishId::new("a/b c")),
            "http://localhost:3001/wishes/a%2Fb%20c"
        );
    }

    #[tokio::test]
    async fn test_list() {
        let transport = FakeTransport::new();
        transport.respond_json(200, json!([wish_json("1", 10.0), wish_json("2", 20.0)]));

        let wishes = api(&transport).list().await.unwrap();
        assert_eq!(wishes.len(), 2);

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].url, "http://localhost:3001/wishes");
    }

    #[tokio::test]
    async fn test_create_posts_stamped_body() {
        let transport = FakeTransport::new();
        transport.respond_json(201, wish_json("abc", 30.0));

        let body = NewWish::stamped(
            WishFormData {
                title: "Kettle".into(),
                description: "Gooseneck".into(),
                price: 30.0,
                image_url: "https://img.test/kettle.jpg".into(),
            },
            Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap(),
        );
        let created = api(&transport).create(&body).await.unwrap();
        assert_eq!(created.id, WishId::new("abc"));

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.method, Method::POST);
        let sent = request.body.as_ref().unwrap();
        assert_eq!(sent["createdAt"], "2026-04-01T08:00:00.000Z");
        assert_eq!(sent["price"], 30.0);
    }

    #[tokio::test]
    async fn test_update_patches_item_url() {
        let transport = FakeTransport::new();
        transport.respond_json(200, wish_json("7", 99.0));

        let fields = WishFormData {
            title: "Kettle".into(),
            description: "Gooseneck".into(),
            price: 99.0,
            image_url: "https://img.test/kettle.jpg".into(),
        };
        let updated = api(&transport).update(&WishId::new("7"), &fields).await.unwrap();
        assert_eq!(updated.price, 99.0);

        let requests = transport.requests();
        let request = &requests[0];
        assert_eq!(request.method, Method::PATCH);
        assert_eq!(request.url, "http://localhost:3001/wishes/7");
        assert!(request.body.as_ref().unwrap().get("createdAt").is_none());
    }

    #[tokio::test]
    async fn test_delete_accepts_empty_object() {
        let transport = FakeTransport::new();
        transport.respond(200, "{}").respond(404, "");
        let api = api(&transport);

        assert!(api.delete(&WishId::new("3")).await.is_ok());
        assert_eq!(
            api.delete(&WishId::new("3")).await.unwrap_err(),
            ApiError::Backend { status: 404 }
        );
        assert_eq!(transport.requests()[0].method, Method::DELETE);
    }
}
