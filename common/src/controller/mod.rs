//! Upload → generate → display cycle, plus the independent download action.
//!
//! `UploadController` owns nothing but handles: an [`UploadSurface`] to draw
//! on and a [`GenerateTransport`] to talk to the generator server. The browser
//! build plugs in DOM nodes and `fetch`; the tests plug in recorders.
//!
//! Only one generation is meant to be in flight at a time. That is enforced by
//! the surface disabling its submit control while busy, not by the controller,
//! so overlapping calls are possible and simply race to draw their outcome.

use std::cell::RefCell;

use log::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::UploadError;
use crate::model::generation::{GenerateResponse, GenerationResult};
use crate::render::summary_markup;

mod busy;
mod state;
mod surface;

pub use busy::BusyGuard;
pub use state::UiState;
pub use surface::{GenerateTransport, HttpReply, UploadFile, UploadSurface};

/// Multipart field the generator server reads the specification from.
pub const FILE_FIELD: &str = "file";

pub struct UploadController<S, T> {
    surface: S,
    transport: T,
    config: ClientConfig,
    state: RefCell<UiState>,
    /// Artifact reference of the latest success. `None` until the first one.
    current_filename: RefCell<Option<String>>,
}

impl<S, T> UploadController<S, T>
where
    S: UploadSurface,
    T: GenerateTransport,
{
    pub fn new(surface: S, transport: T, config: ClientConfig) -> Self {
        Self {
            surface,
            transport,
            config,
            state: RefCell::new(UiState::Idle),
            current_filename: RefCell::new(None),
        }
    }

    pub fn state(&self) -> UiState {
        self.state.borrow().clone()
    }

    pub fn current_filename(&self) -> Option<String> {
        self.current_filename.borrow().clone()
    }

    /// Runs one generation attempt for `file` and draws its outcome.
    ///
    /// Every failure ends up in the error panel; nothing is returned to the
    /// caller. The surface is busy exactly while the request is pending.
    pub async fn submit(&self, file: Option<T::File>) {
        let file = match file {
            Some(file) => file,
            None => return self.fail(UploadError::NoFileSelected),
        };
        if let Err(err) = self.check_size(&file) {
            return self.fail(err);
        }

        self.surface.hide_result();
        self.surface.hide_error();
        self.set_state(UiState::Submitting);

        let _busy = BusyGuard::acquire(&self.surface);
        info!("Uploading {} ({} bytes)", file.name(), file.size());

        match self.generate(&file).await {
            Ok(result) => self.succeed(result),
            Err(err) => self.fail(err),
        }
    }

    /// Sends the browser to the latest generated artifact.
    ///
    /// Does nothing until a generation has succeeded.
    pub fn download(&self) {
        let filename = self.current_filename.borrow().clone();
        match filename.filter(|name| !name.is_empty()) {
            Some(name) => {
                let url = self.config.download_url(&name);
                info!("Downloading {}", url);
                self.surface.navigate(&url);
            }
            None => debug!("Download requested before any successful generation"),
        }
    }

    fn check_size(&self, file: &T::File) -> Result<(), UploadError> {
        match self.config.max_upload_bytes {
            Some(limit) if file.size() > limit => Err(UploadError::FileTooLarge {
                size: file.size(),
                limit,
            }),
            _ => Ok(()),
        }
    }

    async fn generate(&self, file: &T::File) -> Result<GenerationResult, UploadError> {
        let reply = self
            .transport
            .post_file(&self.config.generate_url(), FILE_FIELD, file)
            .await?;

        let response = GenerateResponse::from_body(&reply.body)?;
        if let Some(details) = response.details() {
            debug!("Generator reported details: {}", details);
        }
        response.into_result(reply.is_ok())
    }

    fn succeed(&self, result: GenerationResult) {
        info!(
            "Generated {} for {} ({} endpoints)",
            result.filename, result.api_title, result.endpoints_count
        );
        *self.current_filename.borrow_mut() = Some(result.filename.clone());

        self.surface.hide_error();
        self.surface
            .show_result(&summary_markup(&result), &result.test_cases);
        self.set_state(UiState::ShowingResult(result));
    }

    fn fail(&self, err: UploadError) {
        warn!("Generation failed: {}", err);
        let message = err.to_string();

        self.surface.hide_result();
        self.surface.show_error(&message);
        self.set_state(UiState::ShowingError(message));
    }

    fn set_state(&self, state: UiState) {
        *self.state.borrow_mut() = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use std::cell::Cell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    /// What a user would currently see on the page.
    #[derive(Default)]
    struct Page {
        busy: Cell<bool>,
        busy_while_sending: Cell<bool>,
        result_visible: Cell<bool>,
        error_visible: Cell<bool>,
        summary: RefCell<String>,
        output: RefCell<String>,
        error_text: RefCell<String>,
        navigations: RefCell<Vec<String>>,
    }

    struct RecordingSurface(Rc<Page>);

    impl UploadSurface for RecordingSurface {
        fn set_busy(&self, busy: bool) {
            self.0.busy.set(busy);
        }

        fn show_result(&self, summary_markup: &str, output: &str) {
            *self.0.summary.borrow_mut() = summary_markup.to_string();
            *self.0.output.borrow_mut() = output.to_string();
            self.0.result_visible.set(true);
        }

        fn hide_result(&self) {
            self.0.result_visible.set(false);
        }

        fn show_error(&self, message: &str) {
            *self.0.error_text.borrow_mut() = message.to_string();
            self.0.error_visible.set(true);
        }

        fn hide_error(&self) {
            self.0.error_visible.set(false);
        }

        fn navigate(&self, url: &str) {
            self.0.navigations.borrow_mut().push(url.to_string());
        }
    }

    struct FakeFile {
        name: &'static str,
        size: u64,
    }

    impl UploadFile for FakeFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    struct FakeTransport {
        page: Rc<Page>,
        replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
        requests: RefCell<Vec<(String, String, String)>>,
    }

    #[async_trait(?Send)]
    impl GenerateTransport for FakeTransport {
        type File = FakeFile;

        async fn post_file(
            &self,
            url: &str,
            field: &str,
            file: &FakeFile,
        ) -> Result<HttpReply, TransportError> {
            self.page.busy_while_sending.set(self.page.busy.get());
            self.requests
                .borrow_mut()
                .push((url.to_string(), field.to_string(), file.name()));
            self.replies
                .borrow_mut()
                .pop_front()
                .expect("unexpected request")
        }
    }

    type Controller = UploadController<RecordingSurface, FakeTransport>;

    fn controller_with(
        config: ClientConfig,
        replies: Vec<Result<HttpReply, TransportError>>,
    ) -> (Controller, Rc<Page>) {
        let page = Rc::new(Page::default());
        let transport = FakeTransport {
            page: page.clone(),
            replies: RefCell::new(replies.into()),
            requests: RefCell::new(Vec::new()),
        };
        let controller =
            UploadController::new(RecordingSurface(page.clone()), transport, config);
        (controller, page)
    }

    fn controller(replies: Vec<Result<HttpReply, TransportError>>) -> (Controller, Rc<Page>) {
        controller_with(ClientConfig::default(), replies)
    }

    fn reply(status: u16, body: &str) -> Result<HttpReply, TransportError> {
        Ok(HttpReply {
            status,
            body: body.to_string(),
        })
    }

    fn success(title: &str, count: u64, filename: &str, tests: &str) -> Result<HttpReply, TransportError> {
        let body = serde_json::json!({
            "success": true,
            "api_title": title,
            "endpoints_count": count,
            "filename": filename,
            "test_cases": tests,
        });
        reply(200, &body.to_string())
    }

    fn openapi_file() -> Option<FakeFile> {
        Some(FakeFile {
            name: "spec.yaml",
            size: 2048,
        })
    }

    fn request_count(controller: &Controller) -> usize {
        controller.transport.requests.borrow().len()
    }

    #[test]
    fn missing_file_makes_no_request() {
        let (controller, page) = controller(vec![]);

        block_on(controller.submit(None));

        assert_eq!(request_count(&controller), 0);
        assert!(page.error_visible.get());
        assert!(!page.result_visible.get());
        assert_eq!(*page.error_text.borrow(), "Please select a file");
        assert_eq!(
            controller.state(),
            UiState::ShowingError("Please select a file".into())
        );
        assert!(!page.busy.get());
    }

    #[test]
    fn missing_file_hides_previous_result() {
        let (controller, page) = controller(vec![success("A", 1, "a.java", "x")]);
        block_on(controller.submit(openapi_file()));
        assert!(page.result_visible.get());

        block_on(controller.submit(None));

        assert!(!page.result_visible.get());
        assert!(page.error_visible.get());
        assert_eq!(controller.current_filename().as_deref(), Some("a.java"));
    }

    #[test]
    fn oversized_file_is_refused_locally() {
        let (controller, page) = controller(vec![]);

        block_on(controller.submit(Some(FakeFile {
            name: "huge.json",
            size: 16 * 1024 * 1024 + 1,
        })));

        assert_eq!(request_count(&controller), 0);
        assert!(page.error_text.borrow().starts_with("File is too large"));
    }

    #[test]
    fn size_check_can_be_disabled() {
        let config = ClientConfig {
            max_upload_bytes: None,
            ..ClientConfig::default()
        };
        let (controller, page) = controller_with(config, vec![success("A", 1, "a.java", "x")]);

        block_on(controller.submit(Some(FakeFile {
            name: "huge.json",
            size: u64::MAX,
        })));

        assert_eq!(request_count(&controller), 1);
        assert!(page.result_visible.get());
    }

    #[test]
    fn success_shows_result_and_remembers_filename() {
        let (controller, page) = controller(vec![success(
            "Pet Store API",
            12,
            "tests_spec_20240101.py",
            "def test_get_pets(): ...",
        )]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(
            *controller.transport.requests.borrow(),
            vec![("/generate".to_string(), "file".to_string(), "spec.yaml".to_string())]
        );
        assert!(page.busy_while_sending.get());
        assert!(!page.busy.get());
        assert!(page.result_visible.get());
        assert!(!page.error_visible.get());

        let summary = page.summary.borrow();
        assert!(summary.contains("Pet Store API"));
        assert!(summary.contains("12"));
        assert!(summary.contains("tests_spec_20240101.py"));
        assert_eq!(*page.output.borrow(), "def test_get_pets(): ...");

        assert_eq!(
            controller.current_filename().as_deref(),
            Some("tests_spec_20240101.py")
        );
        assert_eq!(
            controller.state().result().map(|r| r.endpoints_count),
            Some(12)
        );
    }

    #[test]
    fn output_is_passed_through_verbatim() {
        let tests = "<script>alert(1)</script>\n\tassert a < b";
        let (controller, page) = controller(vec![success("A", 1, "a.py", tests)]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(*page.output.borrow(), tests);
    }

    #[test]
    fn rejection_shows_server_message() {
        let (controller, page) = controller(vec![reply(
            400,
            r#"{"error": "Invalid file type. Please upload JSON, YAML, or YML files."}"#,
        )]);

        block_on(controller.submit(openapi_file()));

        assert!(page.error_visible.get());
        assert!(!page.result_visible.get());
        assert_eq!(
            *page.error_text.borrow(),
            "Invalid file type. Please upload JSON, YAML, or YML files."
        );
        assert!(!page.busy.get());
    }

    #[test]
    fn falsy_success_with_ok_status_uses_default_message() {
        let (controller, page) = controller(vec![reply(200, r#"{"success": false}"#)]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(*page.error_text.borrow(), "Failed to generate test cases");
        assert!(!page.result_visible.get());
        assert_eq!(controller.current_filename(), None);
    }

    #[test]
    fn rejection_with_null_fields_shows_server_message() {
        let (controller, page) = controller(vec![reply(
            422,
            r#"{"success": false, "error": "Spec has no paths", "api_title": null, "endpoints_count": null}"#,
        )]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(*page.error_text.borrow(), "Spec has no paths");
        assert!(page.error_visible.get());
        assert!(!page.result_visible.get());
    }

    #[test]
    fn structured_error_falls_back_to_default_message() {
        let (controller, page) = controller(vec![reply(
            500,
            r#"{"success": false, "error": {"code": 7}, "api_title": null, "endpoints_count": null}"#,
        )]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(*page.error_text.borrow(), "Failed to generate test cases");
        assert!(!page.busy.get());
    }

    #[test]
    fn network_failure_is_prefixed() {
        let (controller, page) =
            controller(vec![Err(TransportError::new("Failed to fetch"))]);

        block_on(controller.submit(openapi_file()));

        assert_eq!(*page.error_text.borrow(), "Network error: Failed to fetch");
        assert!(page.error_visible.get());
        assert!(!page.busy.get());
    }

    #[test]
    fn unreadable_body_is_reported_as_network_error() {
        let (controller, page) =
            controller(vec![reply(413, "<html><h1>Request Entity Too Large</h1></html>")]);

        block_on(controller.submit(openapi_file()));

        assert!(page.error_text.borrow().starts_with("Network error: "));
        assert!(!page.busy.get());
    }

    #[test]
    fn new_attempt_clears_previous_error() {
        let (controller, page) = controller(vec![
            Err(TransportError::new("offline")),
            success("A", 1, "a.java", "x"),
        ]);

        block_on(controller.submit(openapi_file()));
        assert!(page.error_visible.get());

        block_on(controller.submit(openapi_file()));
        assert!(!page.error_visible.get());
        assert!(page.result_visible.get());
    }

    #[test]
    fn download_before_success_does_nothing() {
        let (controller, page) = controller(vec![reply(500, r#"{"error": "boom"}"#)]);

        controller.download();
        block_on(controller.submit(openapi_file()));
        controller.download();

        assert!(page.navigations.borrow().is_empty());
    }

    #[test]
    fn download_navigates_to_latest_artifact() {
        let (controller, page) = controller(vec![
            success("Pet Store API", 12, "tests_spec_20240101.py", "first"),
            success("Inventory", 3, "Inventory_Tests.java", "second"),
        ]);

        block_on(controller.submit(openapi_file()));
        controller.download();
        block_on(controller.submit(openapi_file()));
        controller.download();

        assert_eq!(
            *page.navigations.borrow(),
            vec![
                "/download/tests_spec_20240101.py".to_string(),
                "/download/Inventory_Tests.java".to_string(),
            ]
        );
    }

    #[test]
    fn second_success_replaces_first() {
        let (controller, page) = controller(vec![
            success("Pet Store API", 12, "pets.py", "def test_pets(): ..."),
            success("Inventory", 3, "inventory.py", "def test_stock(): ..."),
        ]);

        block_on(controller.submit(openapi_file()));
        block_on(controller.submit(openapi_file()));

        let summary = page.summary.borrow();
        assert!(summary.contains("Inventory"));
        assert!(!summary.contains("Pet Store API"));
        assert!(!summary.contains("pets.py"));
        assert_eq!(*page.output.borrow(), "def test_stock(): ...");
        assert_eq!(controller.current_filename().as_deref(), Some("inventory.py"));
    }

    #[test]
    fn busy_guard_releases_on_drop() {
        let page = Rc::new(Page::default());
        let surface = RecordingSurface(page.clone());
        {
            let _guard = BusyGuard::acquire(&surface);
            assert!(page.busy.get());
        }
        assert!(!page.busy.get());
    }
}
