use serde::{Deserialize, Serialize};

/// Operation carried by a request to a service handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
  Post,
  Put,
  Patch,
  Delete,
  Get,
}

impl Action {
  /// Whether the action mutates the target's state
  pub fn is_write(&self) -> bool {
    !matches!(self, Self::Get)
  }
}

impl std::str::FromStr for Action {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_uppercase().as_str() {
      "POST" => Ok(Self::Post),
      "PUT" => Ok(Self::Put),
      "PATCH" => Ok(Self::Patch),
      "DELETE" => Ok(Self::Delete),
      "GET" => Ok(Self::Get),
      _ => Err(format!("Unknown action: {}", s)),
    }
  }
}

impl std::fmt::Display for Action {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Post => write!(f, "POST"),
      Self::Put => write!(f, "PUT"),
      Self::Patch => write!(f, "PATCH"),
      Self::Delete => write!(f, "DELETE"),
      Self::Get => write!(f, "GET"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_is_case_insensitive() {
    assert_eq!("patch".parse::<Action>().unwrap(), Action::Patch);
    assert_eq!("Get".parse::<Action>().unwrap(), Action::Get);
    assert!("merge".parse::<Action>().is_err());
  }

  #[test]
  fn only_get_is_read() {
    assert!(Action::Post.is_write());
    assert!(Action::Delete.is_write());
    assert!(!Action::Get.is_write());
  }
}
