/// One registered project: a unique name, the directory it lives in, and
/// whatever free-form lines were stored beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: String,
    pub directory: String,
    pub metadata: Vec<String>,
}

pub const COMMAND_KEY: &str = "cmd";
pub const CREATED_KEY: &str = "created";

impl ProjectRecord {
    pub fn new(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
            metadata: Vec::new(),
        }
    }

    pub fn with_metadata(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.metadata.push(format!("{}: {}", key, value.as_ref()));
        self
    }

    /// Value of the first `key: value` metadata line with the given key.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.iter().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            (k.trim() == key).then(|| v.trim())
        })
    }

    pub fn command(&self) -> Option<&str> {
        self.metadata_value(COMMAND_KEY)
    }
}

/// Linear scan; the first record with a matching name wins.
pub fn find_by_name<'a>(records: &'a [ProjectRecord], name: &str) -> Option<&'a ProjectRecord> {
    records.iter().find(|record| record.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_metadata() {
        let record = ProjectRecord::new("web", "/srv/web")
            .with_metadata(COMMAND_KEY, "proj start web --at /srv/web")
            .with_metadata(CREATED_KEY, "2026-01-02T03:04:05+00:00");

        assert_eq!(record.metadata.len(), 2);
        assert_eq!(record.metadata[0], "cmd: proj start web --at /srv/web");
        assert_eq!(record.command(), Some("proj start web --at /srv/web"));
        assert_eq!(
            record.metadata_value(CREATED_KEY),
            Some("2026-01-02T03:04:05+00:00")
        );
        assert_eq!(record.metadata_value("missing"), None);
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let records = vec![
            ProjectRecord::new("api", "/a"),
            ProjectRecord::new("web", "/first"),
            ProjectRecord::new("web", "/second"),
        ];

        assert_eq!(find_by_name(&records, "web").unwrap().directory, "/first");
        assert_eq!(find_by_name(&records, "api").unwrap().directory, "/a");
        assert!(find_by_name(&records, "WEB").is_none());
        assert!(find_by_name(&[], "web").is_none());
    }
}
