//! Browser side of the classification flow: file reads and the multipart POST

use async_trait::async_trait;
use contracts::domain::a001_uploaded_image::FileDescriptor;
use contracts::usecases::u101_classify_image::{
    ClassifierTransport, MultipartForm, TransportResponse,
};
use gloo_net::http::Request;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, FormData};

pub fn describe_file(file: &File) -> FileDescriptor {
    FileDescriptor::new(file.name(), file.type_(), file.size() as u64)
}

/// Read the whole file into memory
pub async fn read_file_bytes(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{e:?}"))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// `fetch` with a `FormData` body; the browser sets the multipart headers
pub struct BrowserTransport;

#[async_trait(?Send)]
impl ClassifierTransport for BrowserTransport {
    async fn post_multipart(
        &self,
        url: &str,
        form: MultipartForm,
    ) -> Result<TransportResponse, String> {
        let form_data = to_form_data(&form)?;

        let response = Request::post(url)
            .body(form_data)
            .map_err(|e| format!("Failed to build request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        Ok(TransportResponse { status, body })
    }
}

fn to_form_data(form: &MultipartForm) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    for part in &form.parts {
        let blob = to_blob(&part.file.bytes, &part.file.mime)?;
        form_data
            .append_with_blob_and_filename(&part.field_name, &blob, &part.file.file_name)
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form_data)
}

fn to_blob(bytes: &[u8], mime: &str) -> Result<Blob, String> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| format!("{e:?}"))
}
