use crate::error;
use serde_plain::{derive_deserialize_from_fromstr, derive_serialize_from_display};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// An EKS control-plane version. EKS only pins `major.minor`, so that is all this holds.
///
/// Written without a `v` prefix (`1.23`), the way EKS names its versions. A leading `v` is
/// tolerated when parsing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct K8sVersion {
    major: u8,
    minor: u8,
}

impl K8sVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }
}

impl Display for K8sVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for K8sVersion {
    type Err = crate::Error;

    fn from_str(input: &str) -> crate::Result<Self> {
        let invalid = |reason: String| error::K8sVersionParseSnafu { input, reason }.build();
        let (major, minor) = input
            .strip_prefix('v')
            .unwrap_or(input)
            .split_once('.')
            .ok_or_else(|| invalid("expected '<major>.<minor>'".to_string()))?;
        Ok(Self {
            major: major
                .parse()
                .map_err(|e| invalid(format!("bad major version '{}': {}", major, e)))?,
            minor: minor
                .parse()
                .map_err(|e| invalid(format!("bad minor version '{}': {}", minor, e)))?,
        })
    }
}

derive_serialize_from_display!(K8sVersion);
derive_deserialize_from_fromstr!(K8sVersion, "EKS version such as 1.23");

#[cfg(test)]
mod test {
    use super::K8sVersion;

    #[test]
    fn parse_with_and_without_v() {
        assert_eq!("1.23".parse::<K8sVersion>().unwrap(), K8sVersion::new(1, 23));
        assert_eq!("v1.21".parse::<K8sVersion>().unwrap(), K8sVersion::new(1, 21));
        assert_eq!(K8sVersion::new(1, 22).to_string(), "1.22");
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for input in ["", "v", "1", "1.x", "one.two", "9999.1", "1.21.3", "1.23-eks"] {
            assert!(input.parse::<K8sVersion>().is_err(), "'{}' should not parse", input);
        }
    }

    #[test]
    fn serde_uses_plain_string() {
        let version: K8sVersion = serde_json::from_str(r#""v1.22""#).unwrap();
        assert_eq!(serde_json::to_string(&version).unwrap(), r#""1.22""#);
        assert!(serde_json::from_str::<K8sVersion>(r#""latest""#).is_err());
    }
}
