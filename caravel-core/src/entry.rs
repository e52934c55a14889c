//! Directory listing entries

/// Entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

/// One direct child of the current directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::File }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Directory }
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Sort for display: directories before files, each group alphabetical
/// (case-insensitive, byte order as tiebreak).
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| {
        kind_rank(a.kind)
            .cmp(&kind_rank(b.kind))
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

fn kind_rank(kind: EntryKind) -> u8 {
    match kind {
        EntryKind::Directory => 0,
        EntryKind::File => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entries: &[DirEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_directories_precede_files() {
        let mut entries = vec![
            DirEntry::file("b.txt"),
            DirEntry::directory("A"),
            DirEntry::file("a.txt"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["A", "a.txt", "b.txt"]);
    }

    #[test]
    fn test_groups_sorted_alphabetically() {
        let mut entries = vec![
            DirEntry::file("zeta"),
            DirEntry::directory("src"),
            DirEntry::file("alpha"),
            DirEntry::directory("docs"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["docs", "src", "alpha", "zeta"]);
    }

    #[test]
    fn test_case_insensitive_within_group() {
        let mut entries = vec![
            DirEntry::file("Beta.txt"),
            DirEntry::file("alpha.txt"),
            DirEntry::file("gamma.txt"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), vec!["alpha.txt", "Beta.txt", "gamma.txt"]);
    }

    #[test]
    fn test_empty_listing() {
        let mut entries: Vec<DirEntry> = Vec::new();
        sort_entries(&mut entries);
        assert!(entries.is_empty());
    }
}
