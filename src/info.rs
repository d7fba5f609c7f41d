use std::path::Path;

/// 语言元信息：高亮前端据此把文件/别名/MIME 类型对应到本词法器。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// 形如 `*.tab` 的文件名模式
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
    pub homepage: &'static str,
}

pub const TAB: LexerInfo = LexerInfo {
    name: "Tab",
    aliases: &["tab"],
    filenames: &["*.tab"],
    mimetypes: &["application/x-tab", "text/x-tab"],
    homepage: "http://tag-lang.xyz",
};

impl LexerInfo {
    /// 文件名是否匹配任一 `*.ext` 模式（只看文件名部分，扩展名区分大小写）。
    pub fn matches_filename(&self, path: impl AsRef<Path>) -> bool {
        let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.filenames.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => name.len() > suffix.len() && name.ends_with(suffix),
            None => name == *pattern,
        })
    }

    pub fn has_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    pub fn has_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.iter().any(|m| *m == mimetype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_patterns() {
        assert!(TAB.matches_filename("prog.tab"));
        assert!(TAB.matches_filename("dir/sub/prog.tab"));
        assert!(!TAB.matches_filename(".tab"));
        assert!(!TAB.matches_filename("prog.tabs"));
        assert!(!TAB.matches_filename("prog.TAB"));
    }

    #[test]
    fn aliases_and_mimetypes() {
        assert!(TAB.has_alias("TAB"));
        assert!(!TAB.has_alias("tabs"));
        assert!(TAB.has_mimetype("text/x-tab"));
        assert!(!TAB.has_mimetype("text/plain"));
    }
}
