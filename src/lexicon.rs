use std::collections::HashSet;
use std::sync::LazyLock;

/// Generational and professional suffixes, lower-cased.
/// Matched after lower-casing a token and dropping one trailing period,
/// so "Jr." and "JR" both hit "jr".
/// Entries ending in a period ("ph.d.", "m.d.") only match a part written
/// with a doubled final period, since exactly one is dropped before lookup.
pub const SUFFIXES: &[&str] = &[
    "esq", "esquire", "jr", "jnr", "sr", "snr", "2", "ii", "iii", "iv", "v", "clu", "chfc", "cfp",
    "md", "phd", "j.d.", "ll.m.", "m.d.", "d.o.", "d.c.", "p.c.", "ph.d.",
];

/// Surname particles fused onto the following part ("van der Berg").
/// Compared case-sensitively: "Van" on its own is a given name.
pub const PREFIXES: &[&str] = &[
    "a", "ab", "antune", "ap", "abu", "al", "alm", "alt", "bab", "bäck", "bar", "bath", "bat",
    "beau", "beck", "ben", "berg", "bet", "bin", "bint", "birch", "björk", "björn", "bjur", "da",
    "dahl", "dal", "de", "degli", "dele", "del", "della", "der", "di", "dos", "du", "e", "ek",
    "el", "escob", "esch", "fleisch", "fitz", "fors", "gott", "griff", "haj", "haug", "holm",
    "ibn", "kauf", "kil", "koop", "kvarn", "la", "le", "lind", "lönn", "lund", "mac", "mhic",
    "mic", "mir", "na", "naka", "neder", "nic", "ni", "nin", "nord", "norr", "ny", "o", "ua",
    r"ui\'", "öfver", "ost", "över", "öz", "papa", "pour", "quarn", "skog", "skoog", "sten",
    "stor", "ström", "söder", "ter", "tre", "türk", "van", "väst", "väster", "vest", "von",
];

/// Honorifics, lower-cased and without periods.
///
/// Multi-word entries are kept for completeness even though a single
/// whitespace-free token can never equal them.
pub const TITLES: &[&str] = &[
    // Common forms of address
    "mr", "mrs", "ms", "miss", "dr", "herr", "monsieur", "hr", "frau",
    // Military, civic, religious and nobility
    "a v m", "admiraal", "admiral", "air cdre", "air commodore", "air marshal",
    "air vice marshal", "alderman", "alhaji", "ambassador", "baron", "barones", "brig",
    "brig gen", "brig general", "brigadier", "brigadier general", "brother", "canon", "capt",
    "captain", "cardinal", "cdr", "chief", "cik", "cmdr", "coach", "col", "colonel",
    "commandant", "commander", "commissioner", "commodore", "comte", "comtessa", "congressman",
    "conseiller", "consul", "conte", "contessa", "corporal", "councillor", "count", "countess",
    "crown prince", "crown princess", "dame", "datin", "dato", "datuk", "datuk seri", "deacon",
    "deaconess", "dean", "dhr", "dipl ing", "doctor", "dott", "dott sa", "dr ing", "dra", "drs",
    "embajador", "embajadora", "en", "encik", "eng", "eur ing", "exma sra", "exmo sr", "f o",
    "father", "first lieutient", "first officer", "flt lieut", "flying officer", "fr",
    "fraulein", "fru", "gen", "generaal", "general", "governor", "graaf", "gravin",
    "group captain", "grp capt", "h e dr", "h h", "h m", "h r h", "hajah", "haji", "hajim",
    "her highness", "her majesty", "high chief", "his highness", "his holiness",
    "his majesty", "hon", "hra", "ing", "ir", "jonkheer", "judge", "justice", "khun ying",
    "kolonel", "lady", "lcda", "lic", "lieut", "lieut cdr", "lieut col", "lieut gen", "lord",
    "m", "m l", "m r", "madame", "mademoiselle", "maj gen", "major", "master", "mevrouw",
    "mlle", "mme", "monsignor", "mstr", "nti", "pastor", "president", "prince", "princess",
    "princesse", "prinses", "prof", "prof sir", "professor", "puan", "puan sri", "rabbi",
    "rear admiral", "rev", "rev canon", "rev dr", "rev mother", "reverend", "rva", "senator",
    "sergeant", "sheikh", "sheikha", "sig", "sig na", "sig ra", "sir", "sister", "sqn ldr",
    "sr", "sr d", "sra", "srta", "sultan", "tan sri", "tan sri dato", "tengku", "teuku",
    "than puying", "the hon dr", "the hon justice", "the hon miss", "the hon mr",
    "the hon mrs", "the hon ms", "the hon sir", "the very rev", "toh puan", "tun",
    "vice admiral", "viscount", "viscountess", "wg cdr",
];

/// Words that fuse their two neighbours into one part ("Juan et Glova").
pub const CONJUNCTIONS: &[&str] = &["&", "and", "et", "e", "of", "the", "und", "y"];

/// A read-only word list with a hash index, built once per process.
pub struct Lexicon {
    name: &'static str,
    words: HashSet<&'static str>,
}

impl Lexicon {
    fn new(name: &'static str, words: &'static [&'static str]) -> Self {
        Self {
            name,
            words: words.iter().copied().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership after lower-casing and dropping one trailing period.
    pub fn matches_normalized(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        let key = lower.strip_suffix('.').unwrap_or(&lower);
        self.words.contains(key)
    }
}

pub static SUFFIX_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new("suffix", SUFFIXES));
pub static TITLE_LEXICON: LazyLock<Lexicon> = LazyLock::new(|| Lexicon::new("title", TITLES));
pub static PREFIX_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new("prefix", PREFIXES));
pub static CONJUNCTION_LEXICON: LazyLock<Lexicon> =
    LazyLock::new(|| Lexicon::new("conjunction", CONJUNCTIONS));
