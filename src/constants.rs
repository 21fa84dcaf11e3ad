//! Common constants used throughout hexscaffold.

/// Project name used when none is given on the command line
pub const DEFAULT_PROJECT_NAME: &str = "mi-microservicio";

/// Build descriptor file name, written at the root and in every module
pub const POM_FILE: &str = "pom.xml";

/// Ignore file written at the project root
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Prefix of every generated group id and package
pub const PACKAGE_ROOT: &str = "com";

/// Java sources directory, relative to a module
pub const JAVA_SOURCES_DIR: [&str; 3] = ["src", "main", "java"];

/// Resources directory, relative to a module
pub const RESOURCES_DIR: [&str; 3] = ["src", "main", "resources"];

pub const REST_CONTROLLER_FILE: &str = "HelloController.java";
pub const MAIN_APPLICATION_FILE: &str = "MainApplication.java";
pub const APPLICATION_PROPERTIES_FILE: &str = "application.properties";
