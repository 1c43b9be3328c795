use crate::domain::model::{Dependency, Location};

/// Header line goda prints before the package list.
const LISTING_HEADER: &str = "ID";

/// Turns the lister's stdout into package identifiers, dropping blank lines
/// and the header. Order and duplicates are kept.
pub fn parse_package_list(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != LISTING_HEADER)
        .map(str::to_string)
        .collect()
}

/// Path of `id` relative to `module`, or `None` when `id` lives outside it.
///
/// The prefix only matches on a path boundary: `github.com/x/foobar` is not
/// inside `github.com/x/foo`.
pub fn module_relative_path<'a>(id: &'a str, module: &str) -> Option<&'a str> {
    let rest = id.strip_prefix(module)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('/')
}

pub fn select_dependencies(ids: &[String], module: &str) -> Vec<Dependency> {
    ids.iter()
        .map(|id| {
            let location = match module_relative_path(id, module) {
                Some(rel_path) => Location::InModule {
                    rel_path: rel_path.to_string(),
                },
                None => Location::External,
            };
            Dependency {
                id: id.clone(),
                location,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = "github.com/openai/openai-go/v3";

    #[test]
    fn test_parse_package_list_drops_header_and_blanks() {
        let stdout = "ID\ngithub.com/openai/openai-go/v3/responses\n\n  github.com/openai/openai-go/v3/internal  \ngithub.com/openai/openai-go/v3/responses\n";

        assert_eq!(
            parse_package_list(stdout),
            vec![
                "github.com/openai/openai-go/v3/responses",
                "github.com/openai/openai-go/v3/internal",
                "github.com/openai/openai-go/v3/responses",
            ]
        );
        assert!(parse_package_list("ID\n").is_empty());
        assert!(parse_package_list("").is_empty());
    }

    #[test]
    fn test_module_relative_path() {
        assert_eq!(module_relative_path(MODULE, MODULE), Some(""));
        assert_eq!(
            module_relative_path("github.com/openai/openai-go/v3/internal/param", MODULE),
            Some("internal/param")
        );
        assert_eq!(module_relative_path("github.com/openai/openai-go/v3x", MODULE), None);
        assert_eq!(module_relative_path("net/http", MODULE), None);
        assert_eq!(module_relative_path("", MODULE), None);
    }

    #[test]
    fn test_select_dependencies_preserves_order_and_marks_external() {
        let ids: Vec<String> = [
            "github.com/openai/openai-go/v3/responses",
            "github.com/tidwall/gjson",
            MODULE,
            "github.com/openai/openai-go/v3/responses",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        let deps = select_dependencies(&ids, MODULE);

        assert_eq!(deps.len(), 4);
        assert_eq!(deps[0].rel_path(), Some("responses"));
        assert!(deps[1].is_external());
        assert_eq!(deps[1].id, "github.com/tidwall/gjson");
        assert_eq!(deps[2].rel_path(), Some(""));
        assert_eq!(deps[3], deps[0]);
    }

    #[test]
    fn test_select_dependencies_sibling_module_is_external() {
        let ids = vec!["github.com/x/foobar/pkg".to_string(), "github.com/x/foo/pkg".to_string()];

        let deps = select_dependencies(&ids, "github.com/x/foo");

        assert!(deps[0].is_external());
        assert_eq!(deps[1].rel_path(), Some("pkg"));
    }
}
