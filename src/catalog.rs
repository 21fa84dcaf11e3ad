//! The fixed set of modules every generated project is made of.

/// Identity of a catalog module.
///
/// The catalog is closed: per-module behavior is selected by matching on
/// this tag, never by position in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    DomainModel,
    UseCases,
    DrivenAdapters,
    EntryPoints,
}

/// A Maven dependency declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: &'static str,
    pub artifact_id: &'static str,
    pub scope: Option<&'static str>,
}

/// Static description of one module of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub kind: ModuleKind,
    relative_path: &'static str,
    extra_dependencies: &'static [Dependency],
}

const R2DBC_DEPENDENCIES: [Dependency; 2] = [
    Dependency {
        group_id: "org.springframework.boot",
        artifact_id: "spring-boot-starter-data-r2dbc",
        scope: None,
    },
    Dependency {
        group_id: "org.postgresql",
        artifact_id: "r2dbc-postgresql",
        scope: Some("runtime"),
    },
];

const WEBFLUX_DEPENDENCIES: [Dependency; 1] = [Dependency {
    group_id: "org.springframework.boot",
    artifact_id: "spring-boot-starter-webflux",
    scope: None,
}];

/// Modules of the generated project, in generation order.
pub const CATALOG: [ModuleDescriptor; 4] = [
    ModuleDescriptor {
        kind: ModuleKind::DomainModel,
        relative_path: "domain/model",
        extra_dependencies: &[],
    },
    ModuleDescriptor {
        kind: ModuleKind::UseCases,
        relative_path: "application/use-cases",
        extra_dependencies: &[],
    },
    ModuleDescriptor {
        kind: ModuleKind::DrivenAdapters,
        relative_path: "infrastructure/driven-adapters",
        extra_dependencies: &R2DBC_DEPENDENCIES,
    },
    ModuleDescriptor {
        kind: ModuleKind::EntryPoints,
        relative_path: "infrastructure/entry-points",
        extra_dependencies: &WEBFLUX_DEPENDENCIES,
    },
];

/// Returns the module catalog.
pub fn catalog() -> &'static [ModuleDescriptor] {
    &CATALOG
}

impl ModuleDescriptor {
    /// Path of the module relative to the project root, `/`-separated.
    pub fn relative_path(&self) -> &'static str {
        self.relative_path
    }

    /// Last path segment with hyphens removed, e.g. `drivenadapters`.
    pub fn module_name(&self) -> String {
        let last = self
            .relative_path
            .rsplit('/')
            .next()
            .unwrap_or(self.relative_path);
        last.replace('-', "")
    }

    /// Maven artifact id, the relative path with `/` replaced by `-`.
    pub fn artifact_id(&self) -> String {
        self.relative_path.replace('/', "-")
    }

    /// Dependencies declared by this module on top of the inherited ones.
    pub fn extra_dependencies(&self) -> &'static [Dependency] {
        self.extra_dependencies
    }

    /// Whether this module hosts the runnable application.
    pub fn is_entry_point(&self) -> bool {
        self.kind == ModuleKind::EntryPoints
    }
}
