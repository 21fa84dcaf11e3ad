//! Writes a generated project to disk.
//! Walks the module catalog once, rendering and writing each file as it
//! goes, then writes the root-level files.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    catalog::{ModuleDescriptor, ModuleKind},
    config::ExistingOutput,
    constants::{
        APPLICATION_PROPERTIES_FILE, GITIGNORE_FILE, MAIN_APPLICATION_FILE, POM_FILE,
        RESOURCES_DIR, REST_CONTROLLER_FILE,
    },
    error::{Error, Result},
    fs::FileSystem,
    identity::{ModulePackage, ProjectIdentity},
    renderer::TemplateRenderer,
    templates,
};

/// A file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub target_path: PathBuf,
    pub content: String,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized {
    /// Project directory, `<fs_root>/<raw_name>`
    pub root_path: PathBuf,
    /// Every written file, in write order
    pub files: Vec<PathBuf>,
}

/// Lays out a project tree through a [`FileSystem`].
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    fs: &'a dyn FileSystem,
    existing_output: ExistingOutput,
}

impl<'a> Materializer<'a> {
    pub fn new(
        renderer: &'a dyn TemplateRenderer,
        fs: &'a dyn FileSystem,
        existing_output: ExistingOutput,
    ) -> Self {
        Self { renderer, fs, existing_output }
    }

    /// Generates the project described by `identity` and `catalog` under `fs_root`.
    ///
    /// # Errors
    /// * `Error::OutputDirectoryExistsError` if the project directory exists
    ///   and the policy is [`ExistingOutput::Fail`]; nothing is written then
    /// * `Error::CreateDirError` / `Error::WriteError` on the first filesystem
    ///   failure. The run stops there and already written files stay on disk.
    pub fn materialize(
        &self,
        identity: &ProjectIdentity,
        catalog: &[ModuleDescriptor],
        fs_root: &Path,
    ) -> Result<Materialized> {
        let root_path = fs_root.join(identity.raw_name());
        info!("Creating project: {}", identity.raw_name());

        if self.fs.exists(&root_path) {
            match self.existing_output {
                ExistingOutput::Fail => {
                    return Err(Error::OutputDirectoryExistsError {
                        output_dir: root_path.display().to_string(),
                    });
                }
                ExistingOutput::Overwrite => {
                    debug!("Overwriting files in '{}'", root_path.display());
                }
            }
        }

        let mut files = Vec::new();

        for descriptor in catalog {
            let package = identity.module_package(descriptor);
            let module_dir = root_path.join(descriptor.relative_path());

            self.create_dir(&root_path.join(&package.package_path))?;
            self.emit(
                RenderedFile {
                    target_path: module_dir.join(POM_FILE),
                    content: templates::render_module_pom(self.renderer, identity, descriptor)?,
                },
                &mut files,
            )?;

            match descriptor.kind {
                ModuleKind::EntryPoints => self.entry_point_files(
                    identity,
                    descriptor,
                    &root_path,
                    &package,
                    &mut files,
                )?,
                ModuleKind::DomainModel | ModuleKind::UseCases | ModuleKind::DrivenAdapters => {}
            }
        }

        self.emit(
            RenderedFile {
                target_path: root_path.join(GITIGNORE_FILE),
                content: templates::render_gitignore(),
            },
            &mut files,
        )?;
        self.emit(
            RenderedFile {
                target_path: root_path.join(POM_FILE),
                content: templates::render_root_pom(self.renderer, identity)?,
            },
            &mut files,
        )?;

        Ok(Materialized { root_path, files })
    }

    /// REST controller, bootstrap class and properties of the module that
    /// hosts the runnable application.
    fn entry_point_files(
        &self,
        identity: &ProjectIdentity,
        descriptor: &ModuleDescriptor,
        root_path: &Path,
        package: &ModulePackage,
        files: &mut Vec<PathBuf>,
    ) -> Result<()> {
        self.emit(
            RenderedFile {
                target_path: root_path.join(&package.package_path).join(REST_CONTROLLER_FILE),
                content: templates::render_rest_controller(self.renderer, &package.base_package)?,
            },
            files,
        )?;

        let main_package = identity.main_package(descriptor);
        let main_dir = root_path.join(&main_package.package_path);
        self.create_dir(&main_dir)?;
        self.emit(
            RenderedFile {
                target_path: main_dir.join(MAIN_APPLICATION_FILE),
                content: templates::render_main_application(
                    self.renderer,
                    &main_package.base_package,
                )?,
            },
            files,
        )?;

        let mut resources_dir = root_path.join(descriptor.relative_path());
        resources_dir.extend(RESOURCES_DIR);
        self.create_dir(&resources_dir)?;
        self.emit(
            RenderedFile {
                target_path: resources_dir.join(APPLICATION_PROPERTIES_FILE),
                content: templates::render_application_properties(),
            },
            files,
        )
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        debug!("Creating directory: {}", path.display());
        self.fs.create_dir_all(path)
    }

    fn emit(&self, file: RenderedFile, files: &mut Vec<PathBuf>) -> Result<()> {
        debug!("Writing file: {}", file.target_path.display());
        self.fs.write(&file.target_path, &file.content)?;
        files.push(file.target_path);
        Ok(())
    }
}
