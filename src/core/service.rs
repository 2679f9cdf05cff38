use crate::adapters::http::ReqwestTransport;
use crate::config::ClientConfig;
use crate::core::client::ApiClient;
use crate::core::routes::Route;
use crate::domain::model::{ApiResponse, QueryParams, RequestOptions};
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use serde::Serialize;

/// Paging and extra filters for the exercise list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub offset: u32,
    pub filters: QueryParams,
}

impl ExerciseQuery {
    pub fn offset(offset: u32) -> Self {
        Self {
            offset,
            filters: Vec::new(),
        }
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }
}

/// Named operations against the wger REST API.
///
/// Each method resolves one [`Route`] and hands the client's result back
/// as-is: errors are neither caught, retried nor rewrapped here.
pub struct WgerService<T: Transport = ReqwestTransport> {
    client: ApiClient<T>,
}

impl<T: Transport> Clone for WgerService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl WgerService<ReqwestTransport> {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(ApiClient::new(config))
    }
}

impl<T: Transport> WgerService<T> {
    pub fn with_client(client: ApiClient<T>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    async fn call(&self, route: Route, options: RequestOptions) -> Result<ApiResponse> {
        let options = RequestOptions {
            query: route
                .default_query()
                .into_iter()
                .chain(options.query)
                .collect(),
            ..options
        };
        self.client
            .request(route.method(), &route.path(), options)
            .await
    }

    pub async fn get_exercises(&self, query: &ExerciseQuery) -> Result<ApiResponse> {
        let options = RequestOptions::new().queries(query.filters.iter().cloned());
        self.call(Route::Exercises { offset: query.offset }, options)
            .await
    }

    pub async fn get_exercise_info(&self, id: u64) -> Result<ApiResponse> {
        self.call(Route::ExerciseInfo(id), RequestOptions::new())
            .await
    }

    pub async fn get_categories(&self) -> Result<ApiResponse> {
        self.call(Route::ExerciseCategories, RequestOptions::new())
            .await
    }

    pub async fn get_routines(&self) -> Result<ApiResponse> {
        self.call(Route::Routines, RequestOptions::new()).await
    }

    pub async fn get_routine_detail(&self, id: u64) -> Result<ApiResponse> {
        self.call(Route::RoutineDetail(id), RequestOptions::new())
            .await
    }

    pub async fn get_routine_structure(&self, id: u64) -> Result<ApiResponse> {
        self.call(Route::RoutineStructure(id), RequestOptions::new())
            .await
    }

    /// `POST /{kind}/` with `payload` as the JSON body.
    pub async fn save_data<P: Serialize + ?Sized>(
        &self,
        kind: &str,
        payload: &P,
    ) -> Result<ApiResponse> {
        self.post(Route::Collection(kind.to_string()), payload)
            .await
    }

    pub async fn create_routine_slot<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<ApiResponse> {
        self.post(Route::Slot, payload).await
    }

    pub async fn create_routine_slot_entry<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<ApiResponse> {
        self.post(Route::SlotEntry, payload).await
    }

    async fn post<P: Serialize + ?Sized>(&self, route: Route, payload: &P) -> Result<ApiResponse> {
        let body = serde_json::to_value(payload)?;
        self.call(route, RequestOptions::new().body(body)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::tests::RecordingTransport;
    use crate::domain::model::HttpMethod;
    use crate::utils::error::WgerError;
    use serde_json::json;

    fn service(token: &str) -> WgerService<RecordingTransport> {
        WgerService::with_client(ApiClient::with_transport(
            ClientConfig::new("https://wger.de/api/v2", token),
            RecordingTransport::default(),
        ))
    }

    fn pairs(items: &[(&str, &str)]) -> QueryParams {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_get_exercises_defaults_to_first_page() {
        let service = service("t");
        service
            .get_exercises(&ExerciseQuery::default())
            .await
            .unwrap();

        let request = service.client().transport().last();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/exercise/?language=2&limit=20&offset=0");
        assert_eq!(
            request.url,
            "https://wger.de/api/v2/exercise/?language=2&limit=20&offset=0"
        );
        assert!(request.query.is_empty());
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_get_exercises_appends_filters() {
        let service = service("t");
        let query = ExerciseQuery::offset(20)
            .filter("category", 10)
            .filter("equipment", 3);
        service.get_exercises(&query).await.unwrap();

        let request = service.client().transport().last();
        assert_eq!(request.path, "/exercise/?language=2&limit=20&offset=20");
        assert_eq!(request.query, pairs(&[("category", "10"), ("equipment", "3")]));
    }

    #[tokio::test]
    async fn test_simple_get_routes() {
        let service = service("t");

        service.get_exercise_info(42).await.unwrap();
        assert_eq!(service.client().transport().last().path, "/exerciseinfo/42/");

        service.get_categories().await.unwrap();
        assert_eq!(service.client().transport().last().path, "/exercisecategory/");

        service.get_routine_detail(5).await.unwrap();
        assert_eq!(service.client().transport().last().path, "/routine/5/");

        service.get_routine_structure(5).await.unwrap();
        let request = service.client().transport().last();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/routine/5/structure/");
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_get_routines_always_has_fixed_filters() {
        let service = service("t");
        service.get_routines().await.unwrap();
        service.get_routines().await.unwrap();

        let requests = service.client().transport().requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 2);
        for request in requests {
            assert_eq!(request.path, "/routine/");
            assert_eq!(
                request.query,
                pairs(&[("is_public", "false"), ("is_template", "false")])
            );
        }
    }

    #[tokio::test]
    async fn test_save_data_posts_payload_verbatim() {
        let service = service("t");
        let payload = json!({"routine": 3, "day": 1, "order": 2, "comment": null});
        service.save_data("slot", &payload).await.unwrap();

        let request = service.client().transport().last();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/slot/");
        assert_eq!(request.body, Some(payload));
        assert_eq!(request.header("Content-Type"), Some("application/json"));
    }

    #[tokio::test]
    async fn test_create_slot_and_entry() {
        let service = service("t");

        service
            .create_routine_slot(&json!({"day": 4, "order": 1}))
            .await
            .unwrap();
        let request = service.client().transport().last();
        assert_eq!((request.method, request.path.as_str()), (HttpMethod::Post, "/slot/"));
        assert_eq!(request.body, Some(json!({"day": 4, "order": 1})));

        service
            .create_routine_slot_entry(&json!({"slot": 9, "exercise": 73}))
            .await
            .unwrap();
        let request = service.client().transport().last();
        assert_eq!(
            (request.method, request.path.as_str()),
            (HttpMethod::Post, "/slot-entry/")
        );
        assert_eq!(request.body, Some(json!({"slot": 9, "exercise": 73})));
    }

    #[tokio::test]
    async fn test_typed_payload_serializes_to_same_json() {
        #[derive(Serialize)]
        struct SlotEntry {
            slot: u64,
            exercise: u64,
        }

        let service = service("t");
        service
            .create_routine_slot_entry(&SlotEntry { slot: 9, exercise: 73 })
            .await
            .unwrap();
        assert_eq!(
            service.client().transport().last().body,
            Some(json!({"slot": 9, "exercise": 73}))
        );
    }

    #[tokio::test]
    async fn test_every_call_carries_token_header() {
        let service = service("");
        service.get_categories().await.unwrap();
        service.save_data("slot", &json!({})).await.unwrap();

        for request in service.client().transport().requests.lock().unwrap().iter() {
            assert_eq!(request.header("Authorization"), Some("Token "));
        }
    }

    #[test]
    fn test_transport_errors_pass_through_unchanged() {
        let service = WgerService::with_client(ApiClient::with_transport(
            ClientConfig::default(),
            RecordingTransport::failing(404),
        ));

        let err = tokio_test::block_on(service.get_exercise_info(1)).unwrap_err();
        match err {
            WgerError::Status { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "{\"detail\":\"nope\"}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        // exactly one attempt
        assert_eq!(service.client().transport().requests.lock().unwrap().len(), 1);
    }
}
