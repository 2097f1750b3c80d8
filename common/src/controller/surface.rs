//! The two seams the controller is built over: the page it draws on and the
//! HTTP client it sends through.

use async_trait::async_trait;

use crate::error::TransportError;

/// Handles to the presentation surface.
///
/// Methods take `&self`: the browser implementation only holds DOM node
/// handles, and the controller calls back into it while a request is pending.
pub trait UploadSurface {
    /// Disables the submit control and shows the busy indicator, or the reverse.
    fn set_busy(&self, busy: bool);

    /// Fills the summary block with `summary_markup`, the output area with the
    /// literal `output` text, and reveals the result panel.
    fn show_result(&self, summary_markup: &str, output: &str);

    fn hide_result(&self);

    /// Sets the error message text and reveals the error panel.
    fn show_error(&self, message: &str);

    fn hide_error(&self);

    /// Hands `url` to the browser's own navigation.
    fn navigate(&self, url: &str);
}

/// A file picked by the user.
pub trait UploadFile {
    fn name(&self) -> String;

    /// Size in bytes.
    fn size(&self) -> u64;
}

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a single file as `multipart/form-data`.
#[async_trait(?Send)]
pub trait GenerateTransport {
    type File: UploadFile;

    /// Posts `file` under the form field `field` to `url`. One attempt, no
    /// timeout. Errors only when no reply was received at all.
    async fn post_file(
        &self,
        url: &str,
        field: &str,
        file: &Self::File,
    ) -> Result<HttpReply, TransportError>;
}
