use serde::{Deserialize, Serialize};

/// Downstream target that receives forwarded writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLink {
  pub service: String,
  #[serde(default)]
  pub area: u8,
}

impl ServiceLink {
  pub fn new(service: impl Into<String>, area: u8) -> Self {
    Self {
      service: service.into(),
      area,
    }
  }
}

impl std::fmt::Display for ServiceLink {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}/{}", self.service, self.area)
  }
}
