//! Reference forms
//!
//! The textual shapes a source file may use to point at an image.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A built-in reference form produced by the candidate generator.
///
/// Examples assume the image root was typed as `public/images` and the asset
/// is `public/images/icons/logo.png` with the public prefix `images`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferenceForm {
    /// `public/images/icons/logo.png`
    Alias,
    /// `/public/images/icons/logo.png`
    RootedAlias,
    /// `/images/icons/logo.png`
    RootedPublic,
    /// `images/icons/logo.png`
    Public,
    /// `icons/logo.png`
    Bare,
    /// The bare form with a leading `images/` removed, when it has one
    BareUnprefixed,
}

impl ReferenceForm {
    /// Every built-in form in generation order.
    pub const ALL: [ReferenceForm; 6] = [
        ReferenceForm::Alias,
        ReferenceForm::RootedAlias,
        ReferenceForm::RootedPublic,
        ReferenceForm::Public,
        ReferenceForm::Bare,
        ReferenceForm::BareUnprefixed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceForm::Alias => "alias",
            ReferenceForm::RootedAlias => "rooted-alias",
            ReferenceForm::RootedPublic => "rooted-public",
            ReferenceForm::Public => "public",
            ReferenceForm::Bare => "bare",
            ReferenceForm::BareUnprefixed => "bare-unprefixed",
        }
    }
}

impl fmt::Display for ReferenceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
