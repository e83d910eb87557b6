use regex::Regex;

/// 把關鍵字清單編譯成一個不分大小寫、以字詞邊界包住的正規表達式
pub(crate) fn keyword_regex(terms: &[&str]) -> Regex {
    Regex::new(&format!(r"(?i)\b(?:{})\b", terms.join("|"))).unwrap()
}

/// 依宣告順序排列的 (標籤, 關鍵字) 群組；第一個命中的群組勝出
pub struct KeywordGroups<T: Copy> {
    groups: Vec<(T, Regex)>,
}

impl<T: Copy> KeywordGroups<T> {
    pub fn new(groups: &[(T, &[&str])]) -> Self {
        Self {
            groups: groups
                .iter()
                .map(|(label, terms)| (*label, keyword_regex(terms)))
                .collect(),
        }
    }

    pub fn first_match(&self, text: &str) -> Option<T> {
        self.groups
            .iter()
            .find(|(_, re)| re.is_match(text))
            .map(|(label, _)| *label)
    }

    pub fn labels(&self) -> impl Iterator<Item = T> + '_ {
        self.groups.iter().map(|(label, _)| *label)
    }
}
