use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hexscaffold::{
    catalog::catalog,
    config::ExistingOutput,
    error::{Error, Result},
    fs::{FileSystem, LocalFileSystem},
    identity::ProjectIdentity,
    materializer::{Materialized, Materializer},
    renderer::MiniJinjaRenderer,
};
use tempfile::TempDir;
use walkdir::WalkDir;

fn generate(root: &Path, name: &str, existing_output: ExistingOutput) -> Result<Materialized> {
    let renderer = MiniJinjaRenderer::new();
    let fs = LocalFileSystem;
    Materializer::new(&renderer, &fs, existing_output).materialize(
        &ProjectIdentity::derive(name),
        catalog(),
        root,
    )
}

fn relative_files(root: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/")
        })
        .collect();
    files.sort();
    files
}

#[test_log::test]
fn test_shopping_cart_layout() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(temp_dir.path(), "shopping-cart", ExistingOutput::Fail).unwrap();
    let root = temp_dir.path().join("shopping-cart");

    assert_eq!(result.root_path, root);
    assert_eq!(
        relative_files(&root),
        [
            ".gitignore",
            "application/use-cases/pom.xml",
            "domain/model/pom.xml",
            "infrastructure/driven-adapters/pom.xml",
            "infrastructure/entry-points/pom.xml",
            "infrastructure/entry-points/src/main/java/com/shoppingcart/MainApplication.java",
            "infrastructure/entry-points/src/main/java/com/shoppingcart/entrypoints/HelloController.java",
            "infrastructure/entry-points/src/main/resources/application.properties",
            "pom.xml",
        ]
    );

    for package_dir in [
        "domain/model/src/main/java/com/shoppingcart/model",
        "application/use-cases/src/main/java/com/shoppingcart/usecases",
        "infrastructure/driven-adapters/src/main/java/com/shoppingcart/drivenadapters",
        "infrastructure/entry-points/src/main/java/com/shoppingcart/entrypoints",
    ] {
        assert!(root.join(package_dir).is_dir(), "missing {package_dir}");
    }

    let model_pom = fs::read_to_string(root.join("domain/model/pom.xml")).unwrap();
    assert!(model_pom.contains("<artifactId>shopping-cart</artifactId>"));
    assert!(model_pom.contains("<groupId>com.shoppingcart.model</groupId>"));

    let main = fs::read_to_string(
        root.join("infrastructure/entry-points/src/main/java/com/shoppingcart/MainApplication.java"),
    )
    .unwrap();
    assert!(main.starts_with("package com.shoppingcart;\n"));
}

#[test]
fn test_write_order() {
    let temp_dir = TempDir::new().unwrap();
    let result = generate(temp_dir.path(), "svc", ExistingOutput::Fail).unwrap();
    let names: Vec<PathBuf> = result
        .files
        .iter()
        .map(|file| file.strip_prefix(&result.root_path).unwrap().to_path_buf())
        .collect();

    assert_eq!(names.len(), 9);
    assert_eq!(names[0], PathBuf::from("domain/model/pom.xml"));
    assert_eq!(names[3], PathBuf::from("infrastructure/entry-points/pom.xml"));
    assert_eq!(names[7], PathBuf::from(".gitignore"));
    assert_eq!(names[8], PathBuf::from("pom.xml"));
}

#[test]
fn test_module_count_independent_of_name() {
    for name in ["a", "my-service", "Billing-API"] {
        let temp_dir = TempDir::new().unwrap();
        let result = generate(temp_dir.path(), name, ExistingOutput::Fail).unwrap();
        let poms = result.files.iter().filter(|file| file.ends_with("pom.xml")).count();
        assert_eq!(poms, 5);
        for module in catalog() {
            assert!(result.root_path.join(module.relative_path()).join("pom.xml").is_file());
        }
    }
}

#[test]
fn test_existing_directory_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("svc");
    fs::create_dir(&root).unwrap();

    let result = generate(temp_dir.path(), "svc", ExistingOutput::Fail);

    assert!(matches!(result, Err(Error::OutputDirectoryExistsError { .. })));
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn test_rerun_with_overwrite_rewrites_files_and_keeps_foreign_ones() {
    let temp_dir = TempDir::new().unwrap();
    let fresh_dir = TempDir::new().unwrap();
    generate(temp_dir.path(), "svc", ExistingOutput::Fail).unwrap();
    generate(fresh_dir.path(), "svc", ExistingOutput::Fail).unwrap();

    let root = temp_dir.path().join("svc");
    fs::write(root.join("pom.xml"), "edited").unwrap();
    generate(temp_dir.path(), "svc", ExistingOutput::Overwrite).unwrap();
    assert!(!dir_diff::is_different(&root, fresh_dir.path().join("svc")).unwrap());

    fs::write(root.join("NOTES.md"), "keep me").unwrap();
    generate(temp_dir.path(), "svc", ExistingOutput::Overwrite).unwrap();
    assert_eq!(fs::read_to_string(root.join("NOTES.md")).unwrap(), "keep me");
}

#[test]
fn test_file_in_place_of_directory_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("svc");
    fs::create_dir_all(root.join("domain")).unwrap();
    fs::write(root.join("domain/model"), "not a directory").unwrap();

    let result = generate(temp_dir.path(), "svc", ExistingOutput::Overwrite);

    assert!(matches!(result, Err(Error::CreateDirError { .. })));
    assert!(!root.join("pom.xml").exists());
}

/// Records every call and fails the `fail_at`-th write.
struct FailingFileSystem {
    fail_at: usize,
    writes: RefCell<Vec<PathBuf>>,
}

impl FileSystem for FailingFileSystem {
    fn exists(&self, _path: &Path) -> bool {
        false
    }

    fn create_dir_all(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn write(&self, path: &Path, _content: &str) -> Result<()> {
        let mut writes = self.writes.borrow_mut();
        writes.push(path.to_path_buf());
        if writes.len() == self.fail_at {
            return Err(Error::WriteError {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::Other, "disk full"),
            });
        }
        Ok(())
    }
}

#[test]
fn test_first_write_failure_aborts_the_run() {
    let renderer = MiniJinjaRenderer::new();
    let fs = FailingFileSystem { fail_at: 2, writes: RefCell::new(Vec::new()) };

    let result = Materializer::new(&renderer, &fs, ExistingOutput::Fail).materialize(
        &ProjectIdentity::derive("svc"),
        catalog(),
        Path::new("out"),
    );

    match result {
        Err(Error::WriteError { path, .. }) => {
            assert_eq!(path, PathBuf::from("out/svc/application/use-cases/pom.xml"))
        }
        other => panic!("Expected WriteError, got {other:?}"),
    }
    assert_eq!(fs.writes.borrow().len(), 2);
}
