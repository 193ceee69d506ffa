use bytes::Bytes;
use reqwest::multipart::{Form, Part};

#[derive(Debug, Clone)]
pub enum MultipartValue {
    Text(String),
    File { file_name: String, content: Bytes },
}

/// One named field of a multipart submission. A `None` value means the field
/// is currently unset and emits no part.
#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: Option<MultipartValue>,
}

impl MultipartField {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(MultipartValue::Text(value.into())),
        }
    }

    pub fn file(
        name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            value: Some(MultipartValue::File {
                file_name: file_name.into(),
                content: content.into(),
            }),
        }
    }

    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

/// Capability trait standing in for the runtime field reflection of the
/// original design: payload types enumerate their own parts.
pub trait MultipartPayload {
    fn fields(&self) -> Vec<MultipartField>;
}

pub(crate) fn to_multipart_form<T: MultipartPayload>(payload: &T) -> Form {
    let mut form = Form::new();

    for field in payload.fields() {
        form = match field.value {
            Some(MultipartValue::Text(value)) => form.text(field.name, value),
            Some(MultipartValue::File { file_name, content }) => form.part(
                field.name,
                Part::bytes(content.to_vec()).file_name(file_name),
            ),
            None => form,
        };
    }

    form
}
