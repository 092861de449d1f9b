//! Built-in English Word Tables
//!
//! Closed-class words, irregular inflections and a small list of base
//! forms shared by the tagger and the lemmatizer.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Irregular verbs as (base, past, past participle).
pub static IRREGULAR_VERBS: &[(&str, &str, &str)] = &[
    ("arise", "arose", "arisen"),
    ("awake", "awoke", "awoken"),
    ("bear", "bore", "borne"),
    ("become", "became", "become"),
    ("begin", "began", "begun"),
    ("bend", "bent", "bent"),
    ("bind", "bound", "bound"),
    ("bite", "bit", "bitten"),
    ("bleed", "bled", "bled"),
    ("blow", "blew", "blown"),
    ("break", "broke", "broken"),
    ("breed", "bred", "bred"),
    ("bring", "brought", "brought"),
    ("build", "built", "built"),
    ("buy", "bought", "bought"),
    ("catch", "caught", "caught"),
    ("choose", "chose", "chosen"),
    ("come", "came", "come"),
    ("creep", "crept", "crept"),
    ("deal", "dealt", "dealt"),
    ("dig", "dug", "dug"),
    ("draw", "drew", "drawn"),
    ("drink", "drank", "drunk"),
    ("drive", "drove", "driven"),
    ("eat", "ate", "eaten"),
    ("fall", "fell", "fallen"),
    ("feed", "fed", "fed"),
    ("feel", "felt", "felt"),
    ("fight", "fought", "fought"),
    ("find", "found", "found"),
    ("flee", "fled", "fled"),
    ("fly", "flew", "flown"),
    ("forbid", "forbade", "forbidden"),
    ("forget", "forgot", "forgotten"),
    ("forgive", "forgave", "forgiven"),
    ("freeze", "froze", "frozen"),
    ("get", "got", "gotten"),
    ("give", "gave", "given"),
    ("go", "went", "gone"),
    ("grow", "grew", "grown"),
    ("hang", "hung", "hung"),
    ("hear", "heard", "heard"),
    ("hide", "hid", "hidden"),
    ("hold", "held", "held"),
    ("keep", "kept", "kept"),
    ("know", "knew", "known"),
    ("lead", "led", "led"),
    ("leave", "left", "left"),
    ("lend", "lent", "lent"),
    ("lose", "lost", "lost"),
    ("make", "made", "made"),
    ("mean", "meant", "meant"),
    ("meet", "met", "met"),
    ("overcome", "overcame", "overcome"),
    ("override", "overrode", "overridden"),
    ("pay", "paid", "paid"),
    ("ride", "rode", "ridden"),
    ("ring", "rang", "rung"),
    ("rise", "rose", "risen"),
    ("run", "ran", "run"),
    ("say", "said", "said"),
    ("see", "saw", "seen"),
    ("seek", "sought", "sought"),
    ("sell", "sold", "sold"),
    ("send", "sent", "sent"),
    ("shake", "shook", "shaken"),
    ("shine", "shone", "shone"),
    ("shoot", "shot", "shot"),
    ("show", "showed", "shown"),
    ("sing", "sang", "sung"),
    ("sink", "sank", "sunk"),
    ("sit", "sat", "sat"),
    ("sleep", "slept", "slept"),
    ("slide", "slid", "slid"),
    ("speak", "spoke", "spoken"),
    ("spend", "spent", "spent"),
    ("spin", "spun", "spun"),
    ("stand", "stood", "stood"),
    ("steal", "stole", "stolen"),
    ("stick", "stuck", "stuck"),
    ("strike", "struck", "struck"),
    ("swim", "swam", "swum"),
    ("swing", "swung", "swung"),
    ("take", "took", "taken"),
    ("teach", "taught", "taught"),
    ("tear", "tore", "torn"),
    ("tell", "told", "told"),
    ("think", "thought", "thought"),
    ("throw", "threw", "thrown"),
    ("understand", "understood", "understood"),
    ("wake", "woke", "woken"),
    ("wear", "wore", "worn"),
    ("weep", "wept", "wept"),
    ("win", "won", "won"),
    ("write", "wrote", "written"),
];

/// Inflections of the auxiliaries, mapped to their lemma and tag.
pub static AUXILIARY_FORMS: &[(&str, &str, &str)] = &[
    ("be", "be", "VB"),
    ("am", "be", "VBP"),
    ("are", "be", "VBP"),
    ("is", "be", "VBZ"),
    ("was", "be", "VBD"),
    ("were", "be", "VBD"),
    ("been", "be", "VBN"),
    ("being", "be", "VBG"),
    ("have", "have", "VBP"),
    ("has", "have", "VBZ"),
    ("had", "have", "VBD"),
    ("having", "have", "VBG"),
    ("do", "do", "VBP"),
    ("does", "do", "VBZ"),
    ("did", "do", "VBD"),
    ("done", "do", "VBN"),
    ("doing", "do", "VBG"),
    ("goes", "go", "VBZ"),
];

/// Irregular plural nouns as (plural, singular).
pub static IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("calves", "calf"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("data", "datum"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Nouns that look plural but are their own lemma.
pub static INVARIANT_NOUNS: &[&str] = &[
    "alias", "atlas", "bias", "canvas", "lens", "means", "news", "series",
    "species", "status", "physics", "mathematics",
];

/// Irregular comparatives and superlatives as (form, base).
pub static IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
    ("further", "far"),
    ("farther", "far"),
    ("furthest", "far"),
    ("farthest", "far"),
    ("elder", "old"),
    ("eldest", "old"),
    ("more", "much"),
    ("most", "much"),
    ("less", "little"),
    ("least", "little"),
];

pub static IRREGULAR_ADVERBS: &[(&str, &str)] = &[
    ("better", "well"),
    ("best", "well"),
    ("farther", "far"),
    ("further", "far"),
    ("harder", "hard"),
    ("hardest", "hard"),
    ("deeper", "deeply"),
    ("faster", "fast"),
    ("sooner", "soon"),
];

/// Closed-class words with their Penn Treebank tag.
pub static CLOSED_CLASS: &[(&str, &str)] = &[
    ("a", "DT"), ("an", "DT"), ("the", "DT"), ("this", "DT"), ("that", "DT"),
    ("these", "DT"), ("those", "DT"), ("every", "DT"), ("each", "DT"),
    ("some", "DT"), ("any", "DT"), ("no", "DT"), ("all", "DT"), ("both", "DT"),
    ("another", "DT"), ("either", "DT"), ("neither", "DT"),
    ("i", "PRP"), ("you", "PRP"), ("he", "PRP"), ("she", "PRP"), ("it", "PRP"),
    ("we", "PRP"), ("they", "PRP"), ("me", "PRP"), ("him", "PRP"), ("her", "PRP"),
    ("us", "PRP"), ("them", "PRP"), ("myself", "PRP"), ("yourself", "PRP"),
    ("himself", "PRP"), ("herself", "PRP"), ("itself", "PRP"),
    ("ourselves", "PRP"), ("themselves", "PRP"),
    ("my", "PRP$"), ("your", "PRP$"), ("his", "PRP$"), ("its", "PRP$"),
    ("our", "PRP$"), ("their", "PRP$"),
    ("of", "IN"), ("in", "IN"), ("on", "IN"), ("at", "IN"), ("by", "IN"),
    ("for", "IN"), ("with", "IN"), ("from", "IN"), ("about", "IN"),
    ("into", "IN"), ("over", "IN"), ("under", "IN"), ("after", "IN"),
    ("before", "IN"), ("between", "IN"), ("through", "IN"), ("during", "IN"),
    ("without", "IN"), ("against", "IN"), ("among", "IN"), ("upon", "IN"),
    ("since", "IN"), ("because", "IN"), ("if", "IN"), ("while", "IN"),
    ("although", "IN"), ("though", "IN"), ("than", "IN"), ("as", "IN"),
    ("like", "IN"), ("per", "IN"), ("via", "IN"), ("whether", "IN"),
    ("unless", "IN"), ("until", "IN"), ("within", "IN"), ("across", "IN"),
    ("to", "TO"),
    ("and", "CC"), ("or", "CC"), ("but", "CC"), ("nor", "CC"), ("yet", "CC"),
    ("can", "MD"), ("could", "MD"), ("will", "MD"), ("would", "MD"),
    ("shall", "MD"), ("should", "MD"), ("may", "MD"), ("might", "MD"),
    ("must", "MD"),
    ("which", "WDT"), ("whatever", "WDT"),
    ("who", "WP"), ("whom", "WP"), ("what", "WP"), ("whose", "WP$"),
    ("when", "WRB"), ("where", "WRB"), ("why", "WRB"), ("how", "WRB"),
    ("there", "EX"),
    ("not", "RB"), ("very", "RB"), ("too", "RB"), ("also", "RB"),
    ("just", "RB"), ("now", "RB"), ("then", "RB"), ("here", "RB"),
    ("often", "RB"), ("never", "RB"), ("always", "RB"), ("so", "RB"),
    ("again", "RB"), ("still", "RB"), ("already", "RB"), ("soon", "RB"),
    ("almost", "RB"), ("quite", "RB"), ("rather", "RB"), ("ever", "RB"),
    ("even", "RB"), ("only", "RB"), ("well", "RB"), ("perhaps", "RB"),
    ("up", "RP"), ("out", "RP"), ("off", "RP"), ("down", "RP"),
    ("n't", "RB"), ("'s", "POS"), ("'ll", "MD"), ("'d", "MD"), ("'re", "VBP"),
    ("'ve", "VBP"), ("'m", "VBP"),
    ("oh", "UH"), ("yes", "UH"), ("hello", "UH"),
    ("one", "CD"), ("two", "CD"), ("three", "CD"), ("four", "CD"),
    ("five", "CD"), ("six", "CD"), ("seven", "CD"), ("eight", "CD"),
    ("nine", "CD"), ("ten", "CD"), ("hundred", "CD"), ("thousand", "CD"),
    ("million", "CD"),
    ("better", "JJR"), ("worse", "JJR"), ("more", "JJR"), ("less", "JJR"),
    ("best", "JJS"), ("worst", "JJS"), ("most", "JJS"), ("least", "JJS"),
    ("nothing", "NN"), ("something", "NN"), ("anything", "NN"),
    ("everything", "NN"), ("thing", "NN"), ("morning", "NN"), ("evening", "NN"),
    ("king", "NN"), ("spring", "NN"), ("string", "NN"), ("ceiling", "NN"),
];

/// Common adjectives in their base form.
pub static COMMON_ADJECTIVES: &[&str] = &[
    "able", "angry", "bad", "big", "black", "blue", "bright", "busy",
    "clean", "clear", "close", "cold", "cool", "dark", "deep", "different",
    "dirty", "early", "easy", "empty", "fast", "few", "fine", "free", "full",
    "funny", "gentle", "good", "great", "green", "happy", "hard", "heavy",
    "high", "hot", "hungry", "important", "kind", "large", "late", "light",
    "little", "long", "loud", "low", "lucky", "main", "narrow", "new", "nice",
    "noble", "old", "other", "own", "poor", "pretty", "proud", "pure",
    "quick", "rare", "real", "red", "rich", "right", "sad", "safe", "same",
    "short", "simple", "slow", "small", "soft", "strange", "strong", "sure",
    "sweet", "tall", "thick", "thin", "tiny", "true", "warm", "weak", "white",
    "whole", "wide", "wild", "wise", "wrong", "young",
];

/// Verbs ending in a silent `e` that orthographic rules cannot recover.
pub static SILENT_E_VERBS: &[&str] = &[
    "agree", "arrange", "cause", "change", "charge", "clone", "close",
    "come", "configure", "continue", "create", "exchange", "explore",
    "free", "guarantee", "ignore", "increase", "invite", "like", "live",
    "love", "make", "move", "note", "please", "promote", "quote", "range",
    "release", "remove", "restore", "save", "scale", "score", "serve",
    "store", "take", "use", "vote", "write",
];

static CLOSED_CLASS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| CLOSED_CLASS.iter().copied().collect());

static VERB_FORMS: LazyLock<HashMap<&'static str, (&'static str, &'static str)>> =
    LazyLock::new(|| {
        let mut forms = HashMap::new();
        for &(base, past, participle) in IRREGULAR_VERBS {
            forms.insert(base, (base, "VB"));
            forms.entry(past).or_insert((base, "VBD"));
            forms.entry(participle).or_insert((base, "VBN"));
        }
        for &(form, lemma, tag) in AUXILIARY_FORMS {
            forms.insert(form, (lemma, tag));
        }
        forms
    });

static NOUN_FORMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_NOUNS.iter().copied().collect());

static ADJECTIVE_FORMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_ADJECTIVES.iter().copied().collect());

static ADVERB_FORMS: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| IRREGULAR_ADVERBS.iter().copied().collect());

static BASE_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    COMMON_ADJECTIVES
        .iter()
        .chain(SILENT_E_VERBS.iter())
        .copied()
        .collect()
});

/// Tag of a closed-class word.
pub fn closed_class_tag(word: &str) -> Option<&'static str> {
    CLOSED_CLASS_MAP.get(word).copied()
}

/// Lemma and tag of an irregular or auxiliary verb form.
pub fn verb_form(word: &str) -> Option<(&'static str, &'static str)> {
    VERB_FORMS.get(word).copied()
}

/// Singular of an irregular plural (`mice` -> `mouse`).
pub fn irregular_noun(word: &str) -> Option<&'static str> {
    NOUN_FORMS.get(word).copied()
}

/// Positive form of an irregular comparative or superlative (`worse` -> `bad`).
pub fn irregular_adjective(word: &str) -> Option<&'static str> {
    ADJECTIVE_FORMS.get(word).copied()
}

/// Positive form of an irregular adverb (`better` -> `well`).
pub fn irregular_adverb(word: &str) -> Option<&'static str> {
    ADVERB_FORMS.get(word).copied()
}

/// Nouns whose plural and singular are the same word.
pub fn is_invariant_noun(word: &str) -> bool {
    INVARIANT_NOUNS.contains(&word)
}

/// Whether `word` is in the built-in adjective list.
pub fn is_common_adjective(word: &str) -> bool {
    COMMON_ADJECTIVES.contains(&word)
}

/// Whether `word` is one of the built-in base forms.
pub fn is_base_word(word: &str) -> bool {
    BASE_WORDS.contains(word)
}
