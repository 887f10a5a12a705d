use alloc::borrow::Cow;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use figura_utils::hash::HashMap;
use figura_value::info::namespace_tail;
use figura_value::{Literal, Value};
use serde::{Deserialize, Serialize};

use crate::type_key::TypeKeyRef;
use crate::{FigurativeSettings, LiteralError, TypeKey};

/// The namespace the `<Kind>Ptr` helper constructors live in by default.
pub const DEFAULT_HELPER_NAMESPACE: &str = "figura";

/// A function rendering values of one [`TypeKey`], replacing the default
/// rendering of the value and everything inside it.
///
/// Providers that render nested values should go through
/// [`Figurative::try_literally_value`] so strict-mode failures propagate.
pub type ConstructorProvider =
    Arc<dyn Fn(&Figurative, &Value) -> Result<String, LiteralError> + Send + Sync>;

// -----------------------------------------------------------------------------
// FailureMode

/// What happens when a value cannot be rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureMode {
    /// Render `nil` in place of the value.
    #[default]
    Lenient,
    /// Report a [`LiteralError`].
    Strict,
}

// -----------------------------------------------------------------------------
// Figurative

/// A rendering configuration.
///
/// Holds the naming table used to qualify type names, the constructor
/// providers, the failure mode and the namespace of the `<Kind>Ptr` helpers.
/// Build it once and share it; rendering only reads it.
///
/// # Examples
///
/// ```
/// use figura_render::{Figurative, TypeKey};
/// use figura_value::Repr;
///
/// let figurative = Figurative::new()
///     .with_package_name("github.com/acme/widgets", "w")
///     .with_provider(TypeKey::of::<bool>(), |_, value| {
///         Ok(format!("Flag({})", matches!(value.repr(), Repr::Bool(false))))
///     });
///
/// assert_eq!(figurative.qualifier("github.com/acme/widgets"), "w.");
/// assert_eq!(figurative.qualifier("encoding/json"), "json.");
/// assert_eq!(figurative.literally(&vec![1_u8, 2]), "[]uint8{1, 2}");
/// assert_eq!(figurative.literally(&false), "Flag(true)");
/// ```
#[derive(Clone)]
pub struct Figurative {
    package_names: HashMap<String, String>,
    providers: HashMap<TypeKey, ConstructorProvider>,
    failure_mode: FailureMode,
    helper_namespace: Cow<'static, str>,
}

impl Figurative {
    /// Creates a configuration with the default constructor providers.
    ///
    /// With the `chrono` feature, `time.Time` values are rendered with
    /// `time.Date(..)`.
    pub fn new() -> Self {
        let mut this = Self::empty();
        crate::providers::register_defaults(&mut this);
        this
    }

    /// Creates a configuration without any constructor provider.
    pub fn empty() -> Self {
        Self {
            package_names: HashMap::default(),
            providers: HashMap::default(),
            failure_mode: FailureMode::Lenient,
            helper_namespace: Cow::Borrowed(DEFAULT_HELPER_NAMESPACE),
        }
    }

    /// Creates a configuration with the default providers and `settings`
    /// applied.
    pub fn from_settings(settings: FigurativeSettings) -> Self {
        let mut this = Self::new().with_failure_mode(settings.failure_mode);
        if let Some(namespace) = settings.helper_namespace {
            this.helper_namespace = Cow::Owned(namespace);
        }
        this.package_names.extend(settings.package_names);
        this
    }

    /// Aliases `namespace`; an empty alias renders its types unqualified.
    pub fn with_package_name(
        mut self,
        namespace: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        self.package_names.insert(namespace.into(), alias.into());
        self
    }

    pub fn with_provider<F>(mut self, key: TypeKey, provider: F) -> Self
    where
        F: Fn(&Figurative, &Value) -> Result<String, LiteralError> + Send + Sync + 'static,
    {
        self.register_provider(key, provider);
        self
    }

    #[inline]
    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    /// Shorthand for `with_failure_mode(FailureMode::Strict)`.
    #[inline]
    pub fn strict(self) -> Self {
        self.with_failure_mode(FailureMode::Strict)
    }

    /// Sets the namespace of the `<Kind>Ptr` helpers, qualified like any
    /// other namespace.
    pub fn with_helper_namespace(mut self, namespace: impl Into<Cow<'static, str>>) -> Self {
        self.helper_namespace = namespace.into();
        self
    }

    /// Inserts a provider, returning the one previously registered for `key`.
    pub fn register_provider<F>(&mut self, key: TypeKey, provider: F) -> Option<ConstructorProvider>
    where
        F: Fn(&Figurative, &Value) -> Result<String, LiteralError> + Send + Sync + 'static,
    {
        self.providers.insert(key, Arc::new(provider))
    }

    pub fn remove_provider(&mut self, key: &TypeKey) -> Option<ConstructorProvider> {
        self.providers.remove(key)
    }

    #[inline]
    pub fn provider(&self, key: &TypeKey) -> Option<&ConstructorProvider> {
        self.providers.get(key)
    }

    /// The provider responsible for `value`, if any.
    #[inline]
    pub(crate) fn provider_for(&self, value: &Value) -> Option<&ConstructorProvider> {
        self.providers.get(&TypeKeyRef::of_value(value))
    }

    #[inline]
    pub fn failure_mode(&self) -> FailureMode {
        self.failure_mode
    }

    #[inline]
    pub fn helper_namespace(&self) -> &str {
        &self.helper_namespace
    }

    /// The alias registered for `namespace`.
    #[inline]
    pub fn package_name(&self, namespace: &str) -> Option<&str> {
        self.package_names.get(namespace).map(String::as_str)
    }

    /// Returns the qualifier of `namespace`, with a trailing `.`.
    ///
    /// Registered aliases win; otherwise the last segment of the namespace is
    /// used. An empty alias gives an empty qualifier.
    ///
    /// ```
    /// use figura_render::Figurative;
    ///
    /// let figurative = Figurative::new().with_package_name("example.com/local", "");
    /// assert_eq!(figurative.qualifier("example.com/local"), "");
    /// assert_eq!(figurative.qualifier("my_crate::shapes"), "shapes.");
    /// assert_eq!(figurative.qualifier(""), "");
    /// ```
    pub fn qualifier(&self, namespace: &str) -> String {
        let alias = self
            .package_name(namespace)
            .unwrap_or_else(|| namespace_tail(namespace));
        if alias.is_empty() {
            String::new()
        } else {
            let mut qualifier = String::with_capacity(alias.len() + 1);
            qualifier.push_str(alias);
            qualifier.push('.');
            qualifier
        }
    }

    /// Renders `value` as a literal.
    ///
    /// # Panics
    ///
    /// In [`FailureMode::Strict`], if the value cannot be rendered.
    pub fn literally<T: Literal + ?Sized>(&self, value: &T) -> String {
        self.literally_value(&value.to_value())
    }

    /// Renders `value` as a literal, reporting unsupported values in
    /// [`FailureMode::Strict`].
    pub fn try_literally<T: Literal + ?Sized>(&self, value: &T) -> Result<String, LiteralError> {
        self.try_literally_value(&value.to_value())
    }

    /// Like [`literally`](Self::literally), for an already captured value.
    pub fn literally_value(&self, value: &Value) -> String {
        match self.try_literally_value(value) {
            Ok(literal) => literal,
            Err(err) => err.handle_error(),
        }
    }

    /// Like [`try_literally`](Self::try_literally), for an already captured
    /// value.
    #[inline]
    pub fn try_literally_value(&self, value: &Value) -> Result<String, LiteralError> {
        crate::driver::render(self, value)
    }
}

impl Default for Figurative {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Figurative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Figurative")
            .field("package_names", &self.package_names)
            .field("providers", &self.providers.keys())
            .field("failure_mode", &self.failure_mode)
            .field("helper_namespace", &self.helper_namespace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HELPER_NAMESPACE, FailureMode, Figurative};
    use crate::TypeKey;

    fn assert_send_sync<T: Send + Sync + Clone>() {}

    #[test]
    fn shareable() {
        assert_send_sync::<Figurative>();
    }

    #[test]
    fn defaults() {
        let figurative = Figurative::empty();
        assert_eq!(figurative.failure_mode(), FailureMode::Lenient);
        assert_eq!(figurative.helper_namespace(), DEFAULT_HELPER_NAMESPACE);
        assert_eq!(figurative.strict().failure_mode(), FailureMode::Strict);
    }

    #[test]
    fn qualifiers() {
        let figurative = Figurative::empty()
            .with_package_name("github.com/acme/widgets", "w")
            .with_package_name("local", "");
        assert_eq!(figurative.qualifier("github.com/acme/widgets"), "w.");
        assert_eq!(figurative.qualifier("local"), "");
        assert_eq!(figurative.qualifier("time"), "time.");
        assert_eq!(figurative.qualifier("net/http"), "http.");
        assert_eq!(figurative.qualifier("figura_render::tests"), "tests.");
        assert_eq!(figurative.qualifier(""), "");
        assert_eq!(figurative.package_name("local"), Some(""));
        assert_eq!(figurative.package_name("time"), None);
    }

    #[test]
    fn provider_registry() {
        let key = TypeKey::of::<u8>();
        let mut figurative = Figurative::empty();
        assert!(figurative.provider(&key).is_none());

        let previous = figurative.register_provider(key.clone(), |_, _| Ok("A".into()));
        assert!(previous.is_none());
        let previous = figurative.register_provider(key.clone(), |_, _| Ok("B".into()));
        assert!(previous.is_some());
        assert_eq!(figurative.literally(&1_u8), "B");

        assert!(figurative.remove_provider(&key).is_some());
        assert!(figurative.provider(&key).is_none());
        assert_eq!(figurative.literally(&1_u8), "1");
    }

    #[test]
    fn debug_lists_provider_keys() {
        let figurative = Figurative::empty().with_provider(TypeKey::new("a", "B", true), |_, _| {
            Ok(String::new())
        });
        assert!(format!("{figurative:?}").contains("*a.B"));
    }
}
