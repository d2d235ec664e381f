//! Static node and credential descriptors.
//!
//! These carry what the host needs to register a node: its type name,
//! display metadata and the credential types it may ask for. Parameter
//! schemas for UI rendering are not modelled here.

use serde::Serialize;

/// Registration metadata for a node type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    /// Unique type name; the engine's registry is keyed by this.
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    /// Palette group, e.g. `transform`.
    pub group: &'static str,
    pub version: u32,
    /// Names of credential types this node can use.
    pub credentials: &'static [&'static str],
}

/// A credential type declaration.
///
/// `properties` lists the fields a user fills in; an empty list means the
/// credential is a placeholder that carries no secrets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialType {
    pub name: &'static str,
    pub display_name: &'static str,
    pub properties: &'static [&'static str],
}

impl CredentialType {
    pub fn requires_secrets(&self) -> bool {
        !self.properties.is_empty()
    }
}
