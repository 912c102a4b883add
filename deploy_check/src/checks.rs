use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const REQUIRED_FILES: [&str; 8] = [
    "index.html",
    "styles/main.css",
    "styles/components.css",
    "styles/responsive.css",
    "src/main.rs",
    "Trunk.toml",
    "vercel.json",
    "Cargo.toml",
];

pub const OPTIONAL_FILES: [&str; 4] = ["README.md", "DEPLOYMENT.md", ".gitignore", ".vercelignore"];

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub status: Status,
    pub message: String,
}

impl Finding {
    fn pass(message: impl Into<String>) -> Finding {
        Finding { status: Status::Pass, message: message.into() }
    }

    fn warn(message: impl Into<String>) -> Finding {
        Finding { status: Status::Warn, message: message.into() }
    }

    fn fail(message: impl Into<String>) -> Finding {
        Finding { status: Status::Fail, message: message.into() }
    }

    /// Pass when `ok`, otherwise a warning.
    fn check(ok: bool, pass: impl Into<String>, warn: impl Into<String>) -> Finding {
        if ok { Finding::pass(pass) } else { Finding::warn(warn) }
    }
}

#[derive(Clone, Debug)]
pub struct Section {
    pub icon: &'static str,
    pub title: &'static str,
    pub findings: Vec<Finding>,
}

impl Section {
    fn new(icon: &'static str, title: &'static str) -> Section {
        Section { icon, title, findings: Vec::new() }
    }

    fn push(&mut self, finding: Finding) {
        self.findings.push(finding);
    }
}

#[derive(Clone, Debug)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn passed(&self) -> bool {
        self.findings().all(|f| f.status != Status::Fail)
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.sections.iter().flat_map(|s| s.findings.iter())
    }

    pub fn count(&self, status: Status) -> usize {
        self.findings().filter(|f| f.status == status).count()
    }
}

#[derive(Deserialize)]
struct CargoManifest {
    package: Option<CargoPackage>,
}

#[derive(Deserialize)]
struct CargoPackage {
    name: Option<String>,
}

#[derive(Deserialize)]
struct TrunkConfig {
    build: Option<toml::Table>,
}

#[derive(Deserialize)]
struct VercelConfig {
    builds: Option<serde_json::Value>,
    headers: Option<serde_json::Value>,
}

fn read(root: &Path, file: &str) -> Result<String, CheckError> {
    let path = root.join(file);
    fs::read_to_string(&path).map_err(|source| CheckError::Read { path, source })
}

fn read_toml<T: DeserializeOwned>(root: &Path, file: &str) -> Result<T, CheckError> {
    let raw = read(root, file)?;
    toml::from_str(&raw).map_err(|source| CheckError::Toml { path: root.join(file), source })
}

fn read_json<T: DeserializeOwned>(root: &Path, file: &str) -> Result<T, CheckError> {
    let raw = read(root, file)?;
    serde_json::from_str(&raw).map_err(|source| CheckError::Json { path: root.join(file), source })
}

pub fn check_required_files(root: &Path) -> Section {
    let mut section = Section::new("📋", "Checking required files...");
    for file in REQUIRED_FILES {
        if root.join(file).exists() {
            section.push(Finding::pass(file));
        } else {
            section.push(Finding::fail(format!("{} - MISSING", file)));
        }
    }
    section
}

pub fn check_optional_files(root: &Path) -> Section {
    let mut section = Section::new("📋", "Checking optional files...");
    for file in OPTIONAL_FILES {
        section.push(Finding::check(
            root.join(file).exists(),
            file,
            format!("{} - Optional but recommended", file),
        ));
    }
    section
}

pub fn check_manifest(root: &Path) -> Section {
    let mut section = Section::new("📦", "Checking Cargo.toml and Trunk.toml...");

    match read_toml::<CargoManifest>(root, "Cargo.toml") {
        Ok(manifest) => match manifest.package.and_then(|p| p.name) {
            Some(name) => section.push(Finding::pass(format!("Project name: {}", name))),
            None => section.push(Finding::warn("No project name specified")),
        },
        Err(err) => section.push(Finding::fail(format!("Error reading Cargo.toml: {}", err))),
    }

    match read_toml::<TrunkConfig>(root, "Trunk.toml") {
        Ok(trunk) => section.push(Finding::check(
            trunk.build.is_some_and(|build| !build.is_empty()),
            "Trunk build configured",
            "No [build] settings in Trunk.toml",
        )),
        Err(err) => section.push(Finding::fail(format!("Error reading Trunk.toml: {}", err))),
    }

    section
}

pub fn check_vercel(root: &Path) -> Section {
    let mut section = Section::new("⚡", "Checking vercel.json...");
    match read_json::<VercelConfig>(root, "vercel.json") {
        Ok(config) => {
            section.push(Finding::check(
                config.builds.is_some(),
                "Build configuration found",
                "No build configuration",
            ));
            section.push(Finding::check(
                config.headers.is_some(),
                "Security headers configured",
                "No security headers configured",
            ));
        }
        Err(err) => section.push(Finding::fail(format!("Error reading vercel.json: {}", err))),
    }
    section
}

pub fn check_html(root: &Path) -> Section {
    let mut section = Section::new("🌐", "Checking HTML structure...");
    match read(root, "index.html") {
        Ok(html) => {
            section.push(Finding::check(
                html.contains("<!DOCTYPE html>"),
                "Valid HTML5 doctype",
                "Missing HTML5 doctype",
            ));
            section.push(Finding::check(
                html.contains("lang=\"en\""),
                "Language attribute set",
                "Missing language attribute",
            ));
            section.push(Finding::check(
                html.contains("viewport"),
                "Viewport meta tag found",
                "Missing viewport meta tag",
            ));
        }
        Err(err) => section.push(Finding::fail(format!("Error reading index.html: {}", err))),
    }
    section
}

pub fn run(root: &Path) -> Report {
    let sections = vec![
        check_required_files(root),
        check_optional_files(root),
        check_manifest(root),
        check_vercel(root),
        check_html(root),
    ];
    for section in &sections {
        debug!(section = section.title, findings = section.findings.len(), "section checked");
    }
    Report { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta name="viewport" content="width=device-width" /></head>
<body></body>
</html>"#;

    fn write(root: &Path, file: &str, contents: &str) {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    fn complete_site() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for file in REQUIRED_FILES {
            write(root, file, "");
        }
        for file in OPTIONAL_FILES {
            write(root, file, "");
        }
        write(root, "index.html", INDEX);
        write(root, "Cargo.toml", "[package]\nname = \"frontpage\"\nversion = \"0.1.0\"\n");
        write(root, "Trunk.toml", "[build]\ndist = \"dist\"\n");
        write(root, "vercel.json", r#"{"builds": [], "headers": []}"#);
        dir
    }

    #[test]
    fn test_complete_site_passes_without_warnings() {
        let site = complete_site();
        let report = run(site.path());
        assert!(report.passed());
        assert_eq!(report.count(Status::Warn), 0);
        assert_eq!(report.count(Status::Fail), 0);
    }

    #[test]
    fn test_missing_required_file_fails() {
        let site = complete_site();
        fs::remove_file(site.path().join("styles/components.css")).unwrap();

        let report = run(site.path());

        assert!(!report.passed());
        let failures: Vec<_> = report
            .findings()
            .filter(|f| f.status == Status::Fail)
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(failures, vec!["styles/components.css - MISSING"]);
    }

    #[test]
    fn test_missing_optional_file_only_warns() {
        let site = complete_site();
        fs::remove_file(site.path().join("DEPLOYMENT.md")).unwrap();

        let report = run(site.path());

        assert!(report.passed());
        assert_eq!(report.count(Status::Warn), 1);
    }

    #[test]
    fn test_invalid_vercel_json_fails() {
        let site = complete_site();
        write(site.path(), "vercel.json", "{ not json");

        let section = check_vercel(site.path());

        assert_eq!(section.findings.len(), 1);
        assert_eq!(section.findings[0].status, Status::Fail);
        assert!(section.findings[0].message.starts_with("Error reading vercel.json"));
    }

    #[test]
    fn test_vercel_shape_warnings() {
        let site = complete_site();
        write(site.path(), "vercel.json", r#"{"version": 2}"#);

        let statuses: Vec<Status> = check_vercel(site.path())
            .findings
            .iter()
            .map(|f| f.status)
            .collect();

        assert_eq!(statuses, vec![Status::Warn, Status::Warn]);
    }

    #[test]
    fn test_manifest_without_name_warns() {
        let site = complete_site();
        write(site.path(), "Cargo.toml", "[workspace]\nmembers = []\n");
        write(site.path(), "Trunk.toml", "[serve]\nport = 8080\n");

        let section = check_manifest(site.path());

        assert_eq!(section.findings[0], Finding::warn("No project name specified"));
        assert_eq!(section.findings[1].status, Status::Warn);
    }

    #[test]
    fn test_unparsable_manifest_fails() {
        let site = complete_site();
        write(site.path(), "Cargo.toml", "[package\nname = ");

        let report = run(site.path());

        assert!(!report.passed());
    }

    #[test]
    fn test_html_substring_checks() {
        let site = complete_site();
        write(site.path(), "index.html", "<html><body>hello</body></html>");

        let section = check_html(site.path());

        assert_eq!(section.findings.len(), 3);
        assert!(section.findings.iter().all(|f| f.status == Status::Warn));
    }

    #[test]
    fn test_empty_directory_fails_everything_required() {
        let dir = TempDir::new().unwrap();
        let report = run(dir.path());
        assert!(!report.passed());
        // 8 missing files plus Cargo.toml, Trunk.toml, vercel.json and index.html unreadable
        assert_eq!(report.count(Status::Fail), REQUIRED_FILES.len() + 4);
    }
}
