use serde::Deserialize;
use serde_json::Value;

use crate::{
    classifier::{ClassificationRequest, ProcessingMode},
    ingress::error::{IngressError, missing_input, missing_transcript},
};

/// Body of the primary endpoint. Inline images are counted, never decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmergencyPayload {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub images: Option<Vec<Value>>,
    #[serde(default)]
    pub mode: Option<ProcessingMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VoicePayload {
    #[serde(default)]
    pub transcript: Option<String>,
}

pub fn is_blank(text: Option<&str>) -> bool {
    text.is_none_or(|text| text.trim().is_empty())
}

pub fn text_request(payload: EmergencyPayload) -> Result<ClassificationRequest, IngressError> {
    let image_count = payload.images.as_ref().map_or(0, Vec::len);
    if is_blank(payload.message.as_deref()) && image_count == 0 {
        return Err(missing_input());
    }

    Ok(ClassificationRequest::new(
        payload.message.unwrap_or_default(),
        image_count,
        payload.mode.unwrap_or(ProcessingMode::Text),
    ))
}

pub fn voice_request(payload: VoicePayload) -> Result<ClassificationRequest, IngressError> {
    match payload.transcript {
        Some(transcript) if !transcript.trim().is_empty() => Ok(ClassificationRequest::new(
            transcript,
            0,
            ProcessingMode::Voice,
        )),
        _ => Err(missing_transcript()),
    }
}
