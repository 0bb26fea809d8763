use crate::{
    classifier::{ClassificationRequest, ProcessingMode},
    config::UploadLimits,
    ingress::{
        error::{IngressError, file_too_large, missing_input, too_many_files, unsupported_file_type},
        payloads::is_blank,
    },
};

pub const MESSAGE_FIELD: &str = "message";

/// Accumulates one multipart upload while enforcing [`UploadLimits`].
#[derive(Debug, Clone)]
pub struct UploadBatch {
    limits: UploadLimits,
    message: Option<String>,
    image_count: usize,
}

impl UploadBatch {
    pub fn new(limits: UploadLimits) -> Self {
        Self {
            limits,
            message: None,
            image_count: 0,
        }
    }

    pub fn set_message(&mut self, message: String) {
        self.message = Some(message);
    }

    pub fn image_count(&self) -> usize {
        self.image_count
    }

    /// Called when a file part starts, before any of its bytes are read.
    pub fn admit_file(&mut self, content_type: Option<&str>) -> Result<(), IngressError> {
        let content_type = content_type.unwrap_or("");
        if !content_type.starts_with("image/") {
            return Err(unsupported_file_type(content_type));
        }
        if self.image_count >= self.limits.max_files {
            return Err(too_many_files(self.limits.max_files));
        }
        self.image_count += 1;
        Ok(())
    }

    pub fn check_file_size(&self, received_bytes: usize) -> Result<(), IngressError> {
        if received_bytes > self.limits.max_file_bytes {
            return Err(file_too_large(self.limits.max_file_bytes));
        }
        Ok(())
    }

    pub fn into_request(self) -> Result<ClassificationRequest, IngressError> {
        if is_blank(self.message.as_deref()) && self.image_count == 0 {
            return Err(missing_input());
        }
        Ok(ClassificationRequest::new(
            self.message.unwrap_or_default(),
            self.image_count,
            ProcessingMode::Image,
        ))
    }
}
