use std::sync::OnceLock;

use ahash::AHashMap;
use ustr::{Ustr, UstrSet};

pub const DEFAULT_LOCALE: &str = "en";

// Entries keep their source spelling. Tokens arrive folded, so an accented entry never matches.
const EN: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should",
    "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];

const FR: &[&str] = &[
    "a", "ai", "aie", "aient", "aies", "ait", "as", "au", "aura", "aurai", "auraient", "aurais",
    "aurait", "auras", "aurez", "auriez", "aurions", "aurons", "auront", "aux", "avaient",
    "avais", "avait", "avec", "avez", "aviez", "avions", "avons", "ayant", "ayez", "ayons", "c",
    "ce", "ceci", "cela", "ces", "cet", "cette", "d", "dans", "de", "des", "du", "elle", "en",
    "es", "est", "et", "étaient", "étais", "était", "étant", "été", "êtes", "étiez", "étions",
    "eu", "eue", "eues", "eurent", "eus", "eut", "eux", "il", "ils", "j", "je", "l", "la", "le",
    "les", "leur", "leurs", "lui", "m", "ma", "mais", "me", "même", "mes", "moi", "mon", "n",
    "ne", "nos", "notre", "nous", "on", "ont", "ou", "par", "pas", "pour", "qu", "que", "qui",
    "s", "sa", "se", "sera", "serai", "seraient", "serais", "serait", "seras", "serez", "seriez",
    "serions", "serons", "seront", "ses", "soi", "soient", "sois", "soit", "sommes", "son",
    "sont", "soyez", "soyons", "suis", "sur", "t", "ta", "te", "tes", "toi", "ton", "tu", "un",
    "une", "vos", "votre", "vous", "y",
];

const DE: &[&str] = &[
    "aber", "alle", "allem", "allen", "aller", "alles", "als", "also", "am", "an", "ander",
    "andere", "anderem", "anderen", "anderer", "anderes", "auch", "auf", "aus", "bei", "bin",
    "bis", "bist", "da", "damit", "dann", "das", "dass", "dein", "deine", "dem", "den", "denn",
    "der", "des", "dich", "die", "dies", "diese", "diesem", "diesen", "dieser", "dieses", "dir",
    "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer", "eines", "er", "es",
    "euch", "euer", "eure", "für", "hab", "habe", "haben", "hat", "hatte", "hier", "hin",
    "hinter", "ich", "ihm", "ihn", "ihr", "ihre", "im", "in", "ist", "jede", "jeder", "jedes",
    "jene", "kein", "keine", "man", "mein", "meine", "mich", "mir", "mit", "nach", "nicht",
    "noch", "nun", "nur", "ob", "oder", "ohne", "sehr", "sein", "seine", "sich", "sie", "sind",
    "so", "um", "und", "uns", "unser", "unter", "vom", "von", "vor", "war", "waren", "was",
    "weil", "wenn", "wer", "wie", "wir", "wird", "zu", "zum", "zur", "über",
];

const ES: &[&str] = &[
    "a", "al", "algo", "algunas", "algunos", "ante", "antes", "como", "con", "contra", "cual",
    "cuando", "de", "del", "desde", "donde", "durante", "e", "el", "ella", "ellas", "ellos", "en",
    "entre", "era", "es", "esa", "esas", "ese", "eso", "esos", "esta", "estas", "este", "esto",
    "estos", "fue", "ha", "hasta", "la", "las", "le", "les", "lo", "los", "más", "me", "mi",
    "mis", "mucho", "muy", "nada", "ni", "no", "nos", "o", "otra", "otro", "para", "pero", "poco",
    "por", "porque", "que", "quien", "se", "ser", "si", "sin", "sobre", "su", "sus", "también",
    "te", "tu", "un", "una", "uno", "unos", "y", "ya", "yo",
];

const IT: &[&str] = &[
    "a", "ad", "agli", "ai", "al", "alla", "alle", "allo", "anche", "c", "che", "chi", "ci",
    "coi", "col", "come", "con", "contro", "da", "dagli", "dai", "dal", "dalla", "dalle", "dallo",
    "degli", "dei", "del", "della", "delle", "dello", "di", "e", "ed", "era", "gli", "ha", "i",
    "il", "in", "io", "l", "la", "le", "lei", "li", "lo", "loro", "lui", "ma", "mi", "mio", "ne",
    "negli", "nei", "nel", "nella", "nelle", "nello", "noi", "non", "o", "per", "più", "quale",
    "quanta", "quante", "quanti", "quanto", "quella", "quelle", "quelli", "quello", "questa",
    "queste", "questi", "questo", "se", "si", "sia", "sono", "su", "sua", "sue", "sugli", "sui",
    "sul", "sulla", "sulle", "sullo", "suo", "tra", "tu", "un", "una", "uno", "voi",
];

const NL: &[&str] = &[
    "aan", "al", "alles", "als", "bij", "daar", "dan", "dat", "de", "der", "deze", "die", "dit",
    "doch", "door", "dus", "een", "en", "er", "ge", "geen", "had", "heb", "hem", "het", "hier",
    "hij", "hoe", "hun", "ik", "in", "is", "je", "kan", "maar", "me", "men", "met", "mij", "na",
    "naar", "niet", "nog", "nu", "of", "om", "omdat", "ons", "ook", "op", "over", "te", "tegen",
    "toch", "tot", "u", "uit", "van", "veel", "voor", "want", "was", "wat", "we", "wel", "werd",
    "wie", "wij", "zal", "ze", "zich", "zij", "zijn", "zo", "zonder",
];

const PT: &[&str] = &[
    "a", "ao", "aos", "as", "com", "como", "da", "das", "de", "dela", "dele", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "essa", "esse", "esta", "este", "eu",
    "foi", "há", "isso", "isto", "já", "lhe", "mais", "mas", "me", "mesmo", "meu", "minha",
    "muito", "na", "não", "nas", "nem", "no", "nos", "num", "numa", "o", "os", "ou", "para",
    "pela", "pelas", "pelo", "pelos", "por", "qual", "quando", "que", "quem", "se", "sem", "seu",
    "sua", "também", "te", "tem", "um", "uma", "você",
];

const PL: &[&str] = &[
    "a", "aby", "ach", "acz", "aczkolwiek", "aj", "albo", "ale", "ależ", "ani", "aż", "bardziej",
    "bardzo", "bo", "bowiem", "by", "byli", "bynajmniej", "być", "był", "była", "było", "były",
    "będzie", "będą", "ci", "cię", "ciebie", "co", "cokolwiek", "coś", "czasami", "czasem",
    "czemu", "czy", "czyli", "dla", "dlaczego", "dlatego", "do", "dokąd", "dość", "dużo", "gdy",
    "gdyby", "gdyż", "gdzie", "gdziekolwiek", "gdzieś", "i", "ich", "ile", "im", "iż", "ja", "ją",
    "jak", "jakby", "jaki", "jakie", "jakiś", "jako", "je", "jednak", "jego", "jej", "jemu",
    "jest", "jestem", "jeszcze", "jeśli", "jeżeli", "już", "każdy", "kiedy", "kto", "ktoś",
    "która", "które", "którego", "której", "który", "których", "którym", "którzy", "ku", "lecz",
    "lub", "ma", "mają", "mam", "mi", "mimo", "między", "mną", "mnie", "mogą", "może", "mu",
    "my", "na", "nad", "nam", "nami", "nas", "natomiast", "nawet", "nią", "nic", "nich", "nie",
    "niech", "niego", "niej", "niemu", "nigdy", "nim", "nimi", "niż", "o", "obok", "od", "około",
    "on", "ona", "one", "oni", "ono", "oraz", "po", "pod", "podczas", "pomimo", "ponad",
    "ponieważ", "poza", "przecież", "przed", "przede", "przez", "przy", "również", "są", "się",
    "skąd", "sobie", "sobą", "ta", "tak", "taka", "taki", "takie", "także", "tam", "te", "tego",
    "tej", "temu", "ten", "teraz", "też", "to", "tobą", "tobie", "tu", "tutaj", "ty", "tych",
    "tylko", "tym", "u", "w", "wam", "wami", "was", "we", "według", "więc", "wszyscy",
    "wszystko", "wtedy", "wy", "z", "za", "ze", "że", "żeby",
];

const NO: &[&str] = &[
    "og", "i", "jeg", "det", "at", "en", "et", "den", "til", "er", "som", "på", "de", "med",
    "han", "av", "ikke", "ikkje", "der", "så", "var", "meg", "seg", "men", "ett", "har", "om",
    "vi", "min", "mitt", "ha", "hadde", "hun", "nå", "over", "da", "ved", "fra", "du", "ut", "sin",
    "dem", "oss", "opp", "man", "kan", "hans", "hvor", "eller", "hva", "skal", "selv", "sjøl",
    "her", "alle", "vil", "bli", "ble", "blei", "blitt", "kunne", "inn", "når", "være", "kom",
    "noen", "noe", "ville", "dere", "deres", "kun", "ja", "etter", "ned", "skulle", "denne",
    "for", "deg", "si", "sine", "sitt", "mot", "å", "meget", "hvorfor", "dette", "disse", "uten",
    "hvordan", "ingen", "din", "ditt", "blir", "samme", "hvilken", "hvilke", "sånn", "inni",
    "mellom", "vår", "hver", "hvem", "vors", "hvis", "både", "bare", "enn", "fordi", "før",
    "mange", "også", "slik", "vært", "begge", "siden", "dei", "deira", "eg", "ein", "eit",
    "eitt", "elles", "ho", "honom", "hjå", "me", "medan", "mi", "mine", "mykje", "no", "nokon",
    "noko", "nokre", "so", "um", "upp", "vere", "vore", "vart",
];

const SV: &[&str] = &[
    "och", "det", "att", "i", "en", "jag", "hon", "som", "han", "på", "den", "med", "var", "sig",
    "för", "så", "till", "är", "men", "ett", "om", "hade", "de", "av", "icke", "mig", "du",
    "henne", "då", "sin", "nu", "har", "inte", "hans", "honom", "skulle", "hennes", "där", "min",
    "man", "ej", "vid", "kunde", "något", "från", "ut", "när", "efter", "upp", "vi", "dem",
    "vara", "vad", "över", "än", "dig", "kan", "sina", "här", "ha", "mot", "alla", "under",
    "någon", "eller", "allt", "mycket", "sedan", "ju", "denna", "själv", "detta", "åt", "utan",
    "varit", "hur", "ingen", "mitt", "ni", "bli", "blev", "oss", "din", "dessa", "några",
    "deras", "blir", "mina", "samma", "vilken", "er", "sådan", "vår", "blivit", "dess", "inom",
    "mellan", "sådant", "varför", "varje", "vilka", "ditt", "vem", "vilket", "sådana", "vart",
    "dina", "vars", "vårt", "våra", "ert", "era", "vilkas",
];

const RU: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
    "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
    "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
    "даже", "ну", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас",
    "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ей", "может", "они", "тут", "где",
    "есть", "для", "мы", "тебя", "их", "чем", "была", "сам", "без", "чего", "раз", "тоже",
    "себе", "под", "будет", "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой",
    "ним", "здесь", "этом", "мой", "тем", "чтобы", "нее", "были", "куда", "зачем", "всех",
    "можно", "при", "об", "хоть", "после", "над", "больше", "тот", "через", "эти", "нас",
    "про", "всего", "них", "какая", "много", "разве", "эту", "моя", "перед", "этой", "том",
    "такой", "им", "более", "между",
];

// Keyed by language code. A country code that collides with a key reads that list.
const CORPORA: [(&str, &[&str]); 11] = [
    ("en", EN),
    ("fr", FR),
    ("de", DE),
    ("es", ES),
    ("it", IT),
    ("nl", NL),
    ("pt", PT),
    ("pl", PL),
    ("no", NO),
    ("sv", SV),
    ("ru", RU),
];

fn corpora() -> &'static AHashMap<&'static str, UstrSet> {
    static SETS: OnceLock<AHashMap<&'static str, UstrSet>> = OnceLock::new();
    SETS.get_or_init(|| {
        CORPORA
            .iter()
            .map(|(locale, words)| (*locale, words.iter().map(|w| Ustr::from(*w)).collect()))
            .collect()
    })
}

/// Picks the stopword locale for a country code. Belgium reads French; unknown countries read English.
pub fn locale_for(country_code: &str) -> &'static str {
    let cc = country_code.to_lowercase();
    if cc == "be" {
        return "fr";
    }
    CORPORA
        .iter()
        .find(|(locale, _)| *locale == cc)
        .map(|(locale, _)| *locale)
        .unwrap_or(DEFAULT_LOCALE)
}

#[derive(Debug, Clone, Copy)]
pub struct StopWords {
    pub locale: &'static str,
    words: &'static UstrSet,
}

impl StopWords {
    pub fn for_country(country_code: &str) -> Self {
        let locale = locale_for(country_code);
        let words = corpora()
            .get(locale)
            .or_else(|| corpora().get(DEFAULT_LOCALE))
            .expect("default stopword locale is registered");
        Self { locale, words }
    }

    pub fn contains(&self, token: &str) -> bool {
        // Any stopword was interned when the sets were built, so an unknown Ustr cannot be one.
        Ustr::from_existing(token).map_or(false, |u| self.words.contains(&u))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_country_codes() {
        assert_eq!(locale_for("FR"), "fr");
        assert_eq!(locale_for("be"), "fr");
        assert_eq!(locale_for("Be"), "fr");
        assert_eq!(locale_for("it"), "it");
        assert_eq!(locale_for("us"), "en");
        assert_eq!(locale_for("ba"), "en");
        assert_eq!(locale_for("PL"), "pl");
        assert_eq!(locale_for("no"), "no");
        assert_eq!(locale_for("se"), "en");
        assert_eq!(locale_for(""), "en");
    }

    #[test]
    fn corpora_are_lowercase_words() {
        for (locale, words) in CORPORA.iter() {
            for w in words.iter() {
                assert!(
                    !w.is_empty() && w.chars().all(char::is_lowercase),
                    "{locale} stopword {w:?} is not a lowercase word"
                );
            }
        }
    }

    #[test]
    fn accented_entries_never_match_folded_tokens() {
        let de = StopWords::for_country("de");
        assert!(!de.contains("fur"));
        assert!(!de.contains("uber"));
        assert!(de.contains("der"));
        let fr = StopWords::for_country("fr");
        assert!(!fr.contains("ete"));
        assert!(!fr.contains("meme"));
    }

    #[test]
    fn polish_and_norwegian_have_their_own_lists() {
        let pl = StopWords::for_country("pl");
        assert_eq!(pl.locale, "pl");
        assert!(pl.contains("nad"));
        assert!(!pl.contains("miasto"));
        let no = StopWords::for_country("NO");
        assert_eq!(no.locale, "no");
        assert!(no.contains("og"));
        assert!(!StopWords::for_country("gb").contains("og"));
    }

    #[test]
    fn french_elisions_are_stopwords() {
        let fr = StopWords::for_country("fr");
        for w in ["l", "d", "qu", "de", "la", "le", "les"] {
            assert!(fr.contains(w), "{w} should be a french stopword");
        }
        assert!(!fr.contains("paris"));
        assert!(!fr.contains("arche"));
    }

    #[test]
    fn unknown_country_uses_english() {
        let sw = StopWords::for_country("zz");
        assert_eq!(sw.locale, "en");
        assert!(sw.contains("of"));
        assert!(!sw.contains("city"));
        assert!(!sw.is_empty());
    }
}
