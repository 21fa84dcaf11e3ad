//! Content of every generated file.
//!
//! Each artifact kind has one pure function returning the file content.
//! Templates under `templates/` ending in `.j2` are rendered with plain
//! variable substitution; the others are emitted verbatim. Anything
//! conditional or repeated is composed here, not in the templates.

use serde_json::json;

use crate::catalog::{catalog, Dependency, ModuleDescriptor};
use crate::error::Result;
use crate::identity::ProjectIdentity;
use crate::renderer::TemplateRenderer;

const ROOT_POM: &str = include_str!("templates/root_pom.xml.j2");
const MODULE_POM: &str = include_str!("templates/module_pom.xml.j2");
const DEPENDENCY: &str = include_str!("templates/dependency.xml.j2");
const REST_CONTROLLER: &str = include_str!("templates/HelloController.java.j2");
const MAIN_APPLICATION: &str = include_str!("templates/MainApplication.java.j2");
const APPLICATION_PROPERTIES: &str = include_str!("templates/application.properties");
const GITIGNORE: &str = include_str!("templates/gitignore");

/// Version shared by the root project and all of its modules
pub const PROJECT_VERSION: &str = "0.0.1-SNAPSHOT";

/// Route exposed by the generated REST controller
pub const HELLO_ROUTE: &str = "/hello";

/// Body returned by the generated REST controller
pub const HELLO_GREETING: &str = "¡Hola desde el scaffold Hexagonal Reactivo!";

/// Renders the root `pom.xml`, aggregating every catalog module.
pub fn render_root_pom(
    renderer: &dyn TemplateRenderer,
    identity: &ProjectIdentity,
) -> Result<String> {
    let modules: String = catalog()
        .iter()
        .map(|module| format!("        <module>{}</module>\n", module.relative_path()))
        .collect();

    renderer.render(
        ROOT_POM,
        &json!({
            "group_id": identity.group_id(),
            "artifact_id": identity.raw_name(),
            "version": PROJECT_VERSION,
            "modules": modules,
        }),
    )
}

/// Renders the `pom.xml` of a single module.
///
/// Only modules that declare extra dependencies get entries inside the
/// `<dependencies>` element; the others keep it empty.
pub fn render_module_pom(
    renderer: &dyn TemplateRenderer,
    identity: &ProjectIdentity,
    descriptor: &ModuleDescriptor,
) -> Result<String> {
    let dependencies = render_dependencies(renderer, descriptor.extra_dependencies())?;
    let group_id = identity.module_package(descriptor).base_package;

    renderer.render(
        MODULE_POM,
        &json!({
            "parent_group_id": identity.group_id(),
            "parent_artifact_id": identity.raw_name(),
            "version": PROJECT_VERSION,
            "group_id": group_id,
            "artifact_id": descriptor.artifact_id(),
            "dependencies": dependencies,
        }),
    )
}

fn render_dependencies(
    renderer: &dyn TemplateRenderer,
    dependencies: &[Dependency],
) -> Result<String> {
    dependencies
        .iter()
        .map(|dependency| {
            let scope = dependency
                .scope
                .map(|scope| format!("            <scope>{scope}</scope>\n"))
                .unwrap_or_default();
            renderer.render(
                DEPENDENCY,
                &json!({
                    "group_id": dependency.group_id,
                    "artifact_id": dependency.artifact_id,
                    "scope": scope,
                }),
            )
        })
        .collect()
}

/// Renders the REST controller exposing the greeting route.
pub fn render_rest_controller(renderer: &dyn TemplateRenderer, package: &str) -> Result<String> {
    renderer.render(
        REST_CONTROLLER,
        &json!({
            "package": package,
            "route": HELLO_ROUTE,
            "greeting": HELLO_GREETING,
        }),
    )
}

/// Renders the Spring Boot bootstrap class.
pub fn render_main_application(renderer: &dyn TemplateRenderer, package: &str) -> Result<String> {
    renderer.render(MAIN_APPLICATION, &json!({ "package": package }))
}

/// Database connection defaults and server port of the generated service.
pub fn render_application_properties() -> String {
    APPLICATION_PROPERTIES.to_string()
}

/// Ignore rules for Maven build output and IDE files.
pub fn render_gitignore() -> String {
    GITIGNORE.to_string()
}
