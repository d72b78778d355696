//! Checks that `tests/unit` mirrors `src` and that every test file is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Entry points and module lists need no mirror
    fn is_organizational(relative: &str) -> bool {
        let file = relative.rsplit('/').next().unwrap_or(relative);
        matches!(file, "main.rs" | "lib.rs" | "mod.rs")
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let root = Path::new(root);
        let mut paths = BTreeSet::new();
        if let Err(error) = walk(root, root, &mut paths) {
            assert!(!root.exists(), "Failed to scan {}: {error}", root.display());
        }
        paths
    }

    fn walk(dir: &Path, base: &Path, paths: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .replace('\\', "/");

            if path.is_dir() {
                paths.insert(relative);
                walk(&path, base, paths)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/seed/hash.rs
    #[test]
    fn test_src_files_have_unit_tests() {
        let tests = tree(UNIT);
        let missing: Vec<_> = tree(SRC)
            .into_iter()
            .filter(|path| !is_organizational(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> {UNIT}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing.join("\n")
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/render/legacy.rs
    #[test]
    fn test_unit_tests_have_src_counterparts() {
        let sources = tree(SRC);
        let orphaned: Vec<_> = tree(UNIT)
            .into_iter()
            .filter(|path| !is_organizational(path) && !sources.contains(path))
            .map(|path| format!("  - {UNIT}/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests without source files:\n{}",
            orphaned.join("\n")
        );
    }

    // Parent module file of a unit test path and whether it declares the module
    fn parent_declaration(relative: &str) -> (String, bool) {
        let module = relative.strip_suffix(".rs").unwrap_or(relative);
        let (parent, name) = module.rsplit_once('/').unwrap_or(("", module));
        let parent_file = if parent.is_empty() {
            format!("{UNIT}/main.rs")
        } else {
            format!("{UNIT}/{parent}/mod.rs")
        };
        let declaration = format!("mod {name};");
        let declared = fs::read_to_string(&parent_file)
            .is_ok_and(|content| content.lines().any(|line| line.trim() == declaration));
        (parent_file, declared)
    }

    // Tests every unit test file and directory is declared by its parent module
    // Verified by removing `mod tile;` from tests/unit/render/mod.rs
    #[test]
    fn test_unit_tests_are_declared() {
        let undeclared: Vec<_> = tree(UNIT)
            .into_iter()
            .filter(|path| !is_organizational(path))
            .filter_map(|path| {
                let (parent_file, declared) = parent_declaration(&path);
                (!declared).then(|| format!("  - {UNIT}/{path} (not in {parent_file})"))
            })
            .collect();

        assert!(
            undeclared.is_empty(),
            "Unit test modules that are never compiled:\n{}",
            undeclared.join("\n")
        );
    }

    // Tests every test file under tests/ defines at least one test
    // Verified by emptying tests/unit/io/events.rs
    #[test]
    fn test_test_files_contain_tests() {
        let without_tests: Vec<_> = tree("tests")
            .into_iter()
            .filter(|path| path.ends_with(".rs") && !is_organizational(path))
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .map_or(true, |content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
