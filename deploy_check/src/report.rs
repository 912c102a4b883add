use std::fmt;

use crate::checks::{Report, Status};

const RULE_WIDTH: usize = 50;

impl Status {
    fn marker(self) -> &'static str {
        match self {
            Status::Pass => "✅",
            Status::Warn => "⚠️ ",
            Status::Fail => "❌",
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{} {}", section.icon, section.title)?;
            for finding in &section.findings {
                writeln!(f, "{} {}", finding.status.marker(), finding.message)?;
            }
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "\n{}", rule)?;
        if self.passed() {
            writeln!(f, "🎉 All checks passed! Ready for deployment.")?;
            writeln!(f, "\nNext steps:")?;
            writeln!(f, "1. Push to Git repository")?;
            writeln!(f, "2. Connect to Vercel")?;
            writeln!(f, "3. Deploy automatically")?;
            writeln!(f, "\nOr build locally with: trunk build --release")?;
        } else {
            writeln!(f, "❌ Some issues found. Please fix before deploying.")?;
        }
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use crate::checks::{run, REQUIRED_FILES};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_failed_report_lists_missing_files() {
        let dir = TempDir::new().unwrap();
        let text = run(dir.path()).to_string();

        for file in REQUIRED_FILES {
            assert!(text.contains(&format!("❌ {} - MISSING", file)), "{}", file);
        }
        assert!(text.contains("Some issues found"));
        assert!(!text.contains("All checks passed"));
    }

    #[test]
    fn test_warnings_do_not_fail_report() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for file in REQUIRED_FILES {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, "").unwrap();
        }
        fs::write(root.join("vercel.json"), "{}").unwrap();

        let text = run(root).to_string();

        assert!(text.contains("⚠️  README.md - Optional but recommended"));
        assert!(text.contains("⚠️  No build configuration"));
        assert!(text.contains("All checks passed"));
    }
}
