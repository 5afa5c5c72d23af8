use serde::{Deserialize, Serialize};

use super::PageMetadata;

/// Request/response envelope exchanged with service handlers.
///
/// A write carries one or more records and the `notification` flag, which is
/// `false` for client-issued writes and `true` for echoes of a change that was
/// already applied elsewhere. A read carries either a single partial record
/// or a query text. Responses reuse the same shape: records plus optional
/// paging metadata, or an error message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Elements {
  /// Declared record (or list) type of the carried elements
  #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
  pub type_name: Option<String>,
  #[serde(default)]
  pub elements: Vec<serde_json::Value>,
  #[serde(default)]
  pub notification: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub query: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub metadata: Option<PageMetadata>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

impl Elements {
  pub fn new(type_name: impl Into<String>, elements: Vec<serde_json::Value>) -> Self {
    Self {
      type_name: Some(type_name.into()),
      elements,
      ..Default::default()
    }
  }

  /// Envelope holding a single record
  pub fn single(type_name: impl Into<String>, element: serde_json::Value) -> Self {
    Self::new(type_name, vec![element])
  }

  /// Read request carrying a query text
  pub fn query(text: impl Into<String>) -> Self {
    Self {
      query: Some(text.into()),
      ..Default::default()
    }
  }

  /// Empty acknowledgement typed with the record's list type
  pub fn ack(list_type: impl Into<String>) -> Self {
    Self {
      type_name: Some(list_type.into()),
      ..Default::default()
    }
  }

  pub fn query_result(
    list_type: impl Into<String>,
    elements: Vec<serde_json::Value>,
    metadata: PageMetadata,
  ) -> Self {
    Self {
      type_name: Some(list_type.into()),
      elements,
      metadata: Some(metadata),
      ..Default::default()
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      error: Some(message.into()),
      ..Default::default()
    }
  }

  /// Same payload, marked as an echo so that receivers never forward it again
  pub fn into_notification(mut self) -> Self {
    self.notification = true;
    self
  }

  pub fn with_notification(mut self, notification: bool) -> Self {
    self.notification = notification;
    self
  }

  pub fn is_error(&self) -> bool {
    self.error.is_some()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  /// The only element, if exactly one is present
  pub fn element(&self) -> Option<&serde_json::Value> {
    match self.elements.as_slice() {
      [one] => Some(one),
      _ => None,
    }
  }
}
