//! State trait for the form lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for lifecycle states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: the controller and tests compare states
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: history can be exported as JSON
///
/// # Example
///
/// ```rust
/// use formguard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Banner {
///     Hidden,
///     Shown,
/// }
///
/// impl State for Banner {
///     fn name(&self) -> &str {
///         match self {
///             Self::Hidden => "Hidden",
///             Self::Shown => "Shown",
///         }
///     }
/// }
///
/// assert_eq!(Banner::Shown.name(), "Shown");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used in logs and history dumps.
    fn name(&self) -> &str;
}
