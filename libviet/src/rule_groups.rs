// libviet/src/rule_groups.rs
//
// Hand-curated noisy spelling -> intended word tables.
//
// Groups are merged in `MERGE_ORDER`; a key repeated in a later group
// overrides the earlier entry.

pub type RuleGroup = &'static [(&'static str, &'static str)];

/// Kinship terms and greetings.
pub const FAMILY: RuleGroup = &[
    ("me", "mẹ"), ("mme", "mẹ"), ("mje", "mẹ"), ("mej", "mẹ"), ("mef", "mẹ"), ("bo", "bố"),
    ("boj", "bố"), ("bof", "bố"), ("bô", "bố"), ("cha", "cha"), ("chaof", "chào"),
    ("ong", "ông"), ("ongf", "ông"), ("onng", "ông"), ("ba", "bà"), ("baj", "bà"),
    ("baf", "bà"), ("anh", "anh"), ("chi", "chị"), ("chij", "chị"), ("em", "em"),
    ("con", "con"), ("chau", "cháu"), ("chauf", "cháu"),
];

/// Household objects.
pub const OBJECT: RuleGroup = &[
    ("ban", "bàn"), ("banf", "bàn"), ("bajn", "bàn"), ("ghe", "ghế"), ("ghef", "ghế"),
    ("ghes", "ghế"), ("ghej", "ghế"), ("giuong", "giường"), ("giuon", "giường"),
    ("giuongf", "giường"), ("den", "đèn"), ("denf", "đèn"), ("denj", "đèn"), ("tu", "tủ"),
    ("tuf", "tủ"), ("tuj", "tủ"), ("nha", "nhà"), ("nhaf", "nhà"), ("nhaj", "nhà"),
    ("bep", "bếp"), ("bepj", "bếp"), ("bepf", "bếp"), ("banh", "bánh"), ("banhf", "bánh"),
    ("banhj", "bánh"), ("banan", "bàn ăn"), ("sofa", "sofa"),
];

/// Weather and landscape.
pub const NATURE: RuleGroup = &[
    ("troi", "trời"), ("trowi", "trời"), ("trowif", "trời"), ("trowiff", "trời"),
    ("troiwf", "trời"), ("troiwff", "trời"), ("troiw", "trời"), ("trowiif", "trời"),
    ("troj", "trời"), ("troif", "trời"), ("trwi", "trời"), ("dep", "đẹp"), ("depj", "đẹp"),
    ("depf", "đẹp"), ("ddep", "đẹp"), ("đep", "đẹp"), ("mua", "mưa"), ("muaf", "mưa"),
    ("muwaf", "mưa"), ("muwas", "mưa"), ("nang", "nắng"), ("naws", "nắng"), ("nangf", "nắng"),
    ("lanh", "lạnh"), ("lanhf", "lạnh"), ("lajnh", "lạnh"), ("gio", "gió"), ("giof", "gió"),
    ("gioj", "gió"), ("bien", "biển"), ("bienj", "biển"), ("bienf", "biển"), ("nui", "núi"),
    ("nuif", "núi"), ("nuij", "núi"), ("dat", "đất"), ("datj", "đất"), ("datf", "đất"),
    ("tro", "tro"), ("may", "mây"), ("mayf", "mây"), ("mayj", "mây"),
];

/// Spellings of "trời" seen in chat logs.
pub const SKY: RuleGroup = &[
    ("troi", "trời"), ("trowi", "trời"), ("trowif", "trời"), ("trowiff", "trời"),
    ("troiwf", "trời"), ("troiwff", "trời"), ("troiw", "trời"), ("truoi", "trời"),
    ("troiif", "trời"),
];

/// Everyday verbs.
pub const ACTION: RuleGroup = &[
    ("lam", "làm"), ("lamf", "làm"), ("lamj", "làm"), ("yeu", "yêu"), ("yeuf", "yêu"),
    ("yeuj", "yêu"), ("yeue", "yêu"), ("hoc", "học"), ("hocj", "học"), ("hocf", "học"),
    ("chao", "chào"), ("chaof", "chào"), ("chaoj", "chào"), ("chaofof", "chào"), ("an", "ăn"),
    ("anf", "ăn"), ("anj", "ăn"), ("ngu", "ngủ"), ("nguf", "ngủ"), ("nguj", "ngủ"),
    ("nguw", "ngủ"), ("choi", "chơi"), ("choif", "chơi"), ("choij", "chơi"), ("doc", "đọc"),
    ("docf", "đọc"), ("dojf", "đọc"), ("noi", "nói"), ("noif", "nói"), ("noij", "nói"),
    ("di", "đi"), ("dif", "đi"), ("dij", "đi"), ("viet", "viết"), ("vietj", "viết"),
    ("vietf", "viết"), ("nghe", "nghe"), ("nghef", "nghe"), ("uom", "ươm"), ("xem", "xem"),
];

/// Places, including a few run-together compounds.
pub const PLACE: RuleGroup = &[
    ("truong", "trường"), ("truongf", "trường"), ("lop", "lớp"), ("lopj", "lớp"),
    ("lopf", "lớp"), ("cho", "chợ"), ("chof", "chợ"), ("choj", "chợ"), ("nha", "nhà"),
    ("nhaf", "nhà"), ("truonghoc", "trường học"), ("congvien", "công viên"),
    ("congvienf", "công viên"), ("bien", "biển"), ("bienj", "biển"), ("bienf", "biển"),
    ("nui", "núi"), ("nuif", "núi"), ("rung", "rừng"), ("rungf", "rừng"), ("pho", "phố"),
    ("phof", "phố"), ("duong", "đường"), ("duongf", "đường"), ("nhaang", "nhà hàng"),
    ("quancafe", "quán cafe"),
];

/// Feelings and judgements.
pub const EMOTION: RuleGroup = &[
    ("vui", "vui"), ("buon", "buồn"), ("buonj", "buồn"), ("buonf", "buồn"), ("gian", "giận"),
    ("gianf", "giận"), ("met", "mệt"), ("metf", "mệt"), ("metj", "mệt"), ("doj", "đói"),
    ("doi", "đói"), ("doif", "đói"), ("khat", "khát"), ("khatj", "khát"), ("khatf", "khát"),
    ("to", "tốt"), ("toj", "tốt"), ("tof", "tốt"), ("xau", "xấu"), ("xauf", "xấu"),
    ("xauj", "xấu"), ("dep", "đẹp"), ("depj", "đẹp"), ("depf", "đẹp"), ("hon", "hơn"),
    ("tot", "tốt"), ("totf", "tốt"), ("totj", "tốt"), ("kem", "kém"), ("kemf", "kém"),
    ("kemj", "kém"),
];

/// Miscellaneous observed typos.
pub const EXTRA: RuleGroup = &[
    ("com", "cơm"), ("ngoifa", "ngoài"), ("ngoif", "ngoài"), ("ngoiaf", "ngoài"),
    ("ngoifaf", "ngoài"), ("phsoo", "phố"), ("phos", "phố"), ("soong", "sông"),
    ("soojng", "sông"), ("lutj", "lụt"), ("luf", "lụt"), ("xayry", "xảy"), ("xayr", "xảy"),
    ("xary", "xảy"), ("mawcsc", "mắc cạn"), ("macsc", "mắc cạn"), ("cas", "cá"),
    ("hể", "có thể"), ("he", "hể"),
];

/// Merge order of the groups.
pub const MERGE_ORDER: &[RuleGroup] = &[
    FAMILY, OBJECT, NATURE, ACTION, PLACE, EMOTION, EXTRA, SKY,
];

/// Fallback patterns tried in order after the exact lookup fails.
///
/// Each lead is a regex fragment anchored at the start of the word and
/// followed by any run of ASCII letters (which covers trailing tone keys).
pub const FALLBACK_LEADS: &[(&str, &str)] = &[
    ("tro", "trời"),
    ("chao", "chào"),
    ("[dđ]ep", "đẹp"),
    ("mu[aă]", "mưa"),
    ("yeu", "yêu"),
    ("nh[aă]", "nhà"),
    ("truong", "trường"),
    ("ban", "bàn"),
    ("ghe", "ghế"),
    ("bo", "bố"),
    ("me", "mẹ"),
    ("ba", "bà"),
    ("an", "ăn"),
    ("ngu", "ngủ"),
    ("vui", "vui"),
    ("buon", "buồn"),
    ("met", "mệt"),
    ("doi", "đói"),
    ("khat", "khát"),
    ("tot", "tốt"),
    ("xau", "xấu"),
    ("lanh", "lạnh"),
];
