use alloc::collections::BTreeMap;
use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::FailureMode;

/// Data-driven configuration, e.g. loaded from a JSON or TOML file.
///
/// Missing entries keep their defaults. Turned into a
/// [`Figurative`](crate::Figurative) with
/// [`Figurative::from_settings`](crate::Figurative::from_settings).
///
/// ```json
/// {
///     "package_names": { "github.com/acme/widgets": "w", "example.com/local": "" },
///     "failure_mode": "strict",
///     "helper_namespace": "github.com/acme/ptr"
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FigurativeSettings {
    /// Namespace aliases, an empty alias renders the namespace unqualified.
    pub package_names: BTreeMap<String, String>,
    pub failure_mode: FailureMode,
    /// Namespace of the `<Kind>Ptr` helpers, `figura` when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helper_namespace: Option<String>,
}
