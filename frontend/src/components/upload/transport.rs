use async_trait::async_trait;
use common::controller::{GenerateTransport, HttpReply, UploadFile};
use common::error::TransportError;
use gloo_net::http::Request;
use web_sys::FormData;

use super::helpers::{js_error, net_error};

/// A file taken from the form's file input.
pub struct SelectedFile(pub web_sys::File);

impl UploadFile for SelectedFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn size(&self) -> u64 {
        self.0.size() as u64
    }
}

/// Posts through the browser's `fetch`.
#[derive(Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl GenerateTransport for FetchTransport {
    type File = SelectedFile;

    async fn post_file(
        &self,
        url: &str,
        field: &str,
        file: &SelectedFile,
    ) -> Result<HttpReply, TransportError> {
        let form = FormData::new().map_err(js_error)?;
        form.append_with_blob_and_filename(field, &file.0, &file.0.name())
            .map_err(js_error)?;

        let response = Request::post(url)
            .body(form)
            .map_err(net_error)?
            .send()
            .await
            .map_err(net_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(net_error)?;

        Ok(HttpReply { status, body })
    }
}
