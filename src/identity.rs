//! Project naming.
//! Derives every name used in the generated project from the single raw
//! project name supplied on the command line.

use std::path::{Path, PathBuf};

use crate::catalog::ModuleDescriptor;
use crate::constants::{JAVA_SOURCES_DIR, PACKAGE_ROOT};

/// Names derived once per run from the raw project name.
///
/// The raw name is not validated. Characters that are invalid in a file
/// name or a Java package are carried through and surface later, either as
/// a failed write or as a malformed generated identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    raw_name: String,
    safe_name: String,
}

impl ProjectIdentity {
    /// Derives the identity of a project from its raw name.
    ///
    /// `safe_name` is `raw_name` with every `-` removed; case, digits and
    /// non-ASCII characters pass through verbatim. An empty name yields an
    /// empty safe name, no special casing happens here.
    pub fn derive<S: Into<String>>(raw_name: S) -> Self {
        let raw_name = raw_name.into();
        let safe_name = raw_name.replace('-', "");
        Self { raw_name, safe_name }
    }

    /// Name as supplied. Used as the project directory and root artifact id.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Hyphen-free name. Used as package segment and group id suffix.
    pub fn safe_name(&self) -> &str {
        &self.safe_name
    }

    /// Group id of the root build descriptor, `com.<safe_name>`.
    pub fn group_id(&self) -> String {
        format!("{PACKAGE_ROOT}.{}", self.safe_name)
    }

    /// Package of a catalog module, `com.<safe_name>.<module_name>`.
    pub fn module_package(&self, descriptor: &ModuleDescriptor) -> ModulePackage {
        let base_package = format!("{}.{}", self.group_id(), descriptor.module_name());
        ModulePackage::new(base_package, descriptor.relative_path())
    }

    /// Package of the application bootstrap class, `com.<safe_name>`.
    ///
    /// It carries no module suffix but still lives inside the sources of the
    /// module that hosts it.
    pub fn main_package(&self, host: &ModuleDescriptor) -> ModulePackage {
        ModulePackage::new(self.group_id(), host.relative_path())
    }
}

/// A Java package together with its source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePackage {
    /// Dotted package name
    pub base_package: String,
    /// Source directory of the package, relative to the project root
    pub package_path: PathBuf,
}

impl ModulePackage {
    fn new<P: AsRef<Path>>(base_package: String, module_dir: P) -> Self {
        let mut package_path = module_dir.as_ref().to_path_buf();
        package_path.extend(JAVA_SOURCES_DIR);
        package_path.extend(base_package.split('.'));
        Self { base_package, package_path }
    }
}
