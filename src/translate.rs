//! Localization of league, series, and stage names.
//!
//! Translation is a single pass over the table below, applied in order to
//! the evolving string. Each source phrase is matched case-insensitively as
//! a literal substring, never as a pattern. Because replacements are
//! sequential, a later entry can in principle match text produced by an
//! earlier one; table order is load-bearing and must not be reshuffled.

/// Ordered phrase table: English source → localized target.
const PHRASE_TABLE: &[(&str, &str)] = &[
    // League of Legends
    ("Worlds", "全球总决赛"),
    ("World Championship", "全球总决赛"),
    ("MSI", "季中冠军赛"),
    ("Mid-Season Invitational", "季中冠军赛"),
    ("LPL", "英雄联盟职业联赛"),
    ("LCK", "韩国英雄联盟冠军联赛"),
    ("LCS", "北美英雄联盟冠军联赛"),
    ("LEC", "欧洲英雄联盟冠军联赛"),
    ("LLA", "拉丁美洲联赛"),
    ("CBLOL", "巴西联赛"),
    ("PCS", "太平洋冠军联赛"),
    ("VCS", "越南冠军联赛"),
    ("LJL", "日本联赛"),
    ("LCO", "大洋洲联赛"),
    ("LGC Rising", "法国次级联赛"),
    ("Playoffs", "季后赛"),
    ("Regular Season", "常规赛"),
    ("Spring", "春季赛"),
    ("Summer", "夏季赛"),
    ("Quarterfinal", "四分之一决赛"),
    ("Semifinal", "半决赛"),
    ("Grand final", "总决赛"),
    ("Final", "决赛"),
    // CS2
    ("Major", "Major锦标赛"),
    ("IEM", "Intel极限大师赛"),
    ("Intel Extreme Masters", "Intel极限大师赛"),
    ("ESL Pro League", "ESL职业联赛"),
    ("BLAST", "BLAST赛事"),
    ("BLAST Premier", "BLAST Premier"),
    ("PGL", "PGL赛事"),
    ("CCT", "CCT锦标赛"),
    ("ESEA", "ESEA联赛"),
    // Valorant
    ("VCT", "Valorant冠军巡回赛"),
    ("Champions", "冠军赛"),
    ("Masters", "大师赛"),
    ("Game Changers", "改变者赛事"),
    ("Challengers", "挑战者赛事"),
    // Shared terms
    ("Season", "赛季"),
    ("Split", "阶段"),
    ("Group Stage", "小组赛"),
    ("Knockout Stage", "淘汰赛"),
    ("Upper Bracket", "胜者组"),
    ("Lower Bracket", "败者组"),
    ("Closed Qualifier", "封闭预选赛"),
    ("Open Qualifier", "公开预选赛"),
    ("Online", "线上赛"),
    ("Offline", "线下赛"),
];

/// Localize every recognized phrase in `text`.
///
/// Empty input comes back unchanged.
pub fn translate(text: &str) -> String {
    let mut translated = text.to_string();
    for (source, target) in PHRASE_TABLE {
        translated = replace_ignore_ascii_case(&translated, source, target);
    }
    translated
}

/// Replace every occurrence of `needle` in `haystack`, comparing ASCII
/// case-insensitively. Source phrases are ASCII, so byte offsets into the
/// lowercased copy stay valid for the original string.
fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    debug_assert!(needle.is_ascii() && !needle.is_empty());
    let lowered = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();

    let mut out = String::with_capacity(haystack.len());
    let mut cursor = 0;
    while let Some(offset) = lowered[cursor..].find(&needle) {
        let start = cursor + offset;
        out.push_str(&haystack[cursor..start]);
        out.push_str(replacement);
        cursor = start + needle.len();
    }
    out.push_str(&haystack[cursor..]);
    out
}
