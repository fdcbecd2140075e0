/*!

`blueprint-resolver` turns a `ClusterConfig` into the network, team, version and add-on
descriptors for an EKS blueprint, and drives a [`Provisioner`] over them.

Resolution is a single synchronous pass with no side effects. Anything that would create a cloud
resource (the VPC, the per-namespace IAM roles, the blueprint itself) is returned as a request
and only realized when [`provision`] hands it to a [`Provisioner`].

```
use blueprint_model::{ClusterConfig, Configuration};
use blueprint_resolver::{provision, resolve, ManifestProvisioner};

let config = ClusterConfig::from_yaml_str(
    "stackName: dev\naccount: '111122223333'\nregion: us-west-2\nnamespaces: [team-a]",
)
.unwrap();
let resolved = resolve(&config).unwrap();
let manifest = provision(&resolved, &mut ManifestProvisioner::new("dev")).unwrap();
assert_eq!(manifest.spec.teams.len(), 2);
```

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub use error::{Error, Result};
pub use manifest::{BlueprintManifest, ManifestMetadata, ManifestProvisioner};
pub use provision::provision;
pub use provisioner::Provisioner;
pub use resolve::{build_add_ons, build_teams, resolve, resolve_network, resolve_version};

mod error;
mod manifest;
mod provision;
pub mod provisioner;
mod resolve;
