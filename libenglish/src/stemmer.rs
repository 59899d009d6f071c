// libcantonese/libenglish/src/stemmer.rs
//
// Porter stemmer (M.F. Porter, "An algorithm for suffix stripping", 1980).
//
// Two departures from the published algorithm, matching the reference
// C implementation distributed by the author:
// - step 2 maps "bli" to "ble" (not "abli" to "able")
// - step 2 maps "logi" to "log"
//
// Words of two letters or fewer are returned unchanged. The stemmer works on
// lowercase ASCII bytes; `american_english_stem` takes care of filtering.
//
// Notation in the comments follows the paper: `m` is the number of VC
// sequences in the stem, `*v*` means the stem contains a vowel, `*d` a double
// consonant ending and `*o` a cvc ending whose last consonant is not w, x
// or y.

/// Stemming state over a single word.
///
/// `b[..k]` is the current word, `j` marks the end of the stem while a
/// suffix is being tested.
struct Stemmer {
    b: Vec<u8>,
    k: usize,
    j: usize,
}

impl Stemmer {
    fn new(word: &str) -> Self {
        let b = word.as_bytes().to_vec();
        let k = b.len();
        Self { b, k, j: 0 }
    }

    /// True if `b[i]` is a consonant.
    fn cons(&self, i: usize) -> bool {
        match self.b[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.cons(i - 1),
            _ => true,
        }
    }

    /// Number of consonant sequences in `b[..j]`.
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i >= self.j {
                return n;
            }
            if !self.cons(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i >= self.j {
                    return n;
                }
                if self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i >= self.j {
                    return n;
                }
                if !self.cons(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    /// `*v*`
    fn vowel_in_stem(&self) -> bool {
        (0..self.j).any(|i| !self.cons(i))
    }

    /// `*d` at position `i`.
    fn double_cons(&self, i: usize) -> bool {
        i >= 1 && self.b[i] == self.b[i - 1] && self.cons(i)
    }

    /// `*o` ending at position `i`.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    /// If `b[..k]` ends with `s`, set `j` to the start of the suffix.
    fn ends(&mut self, s: &str) -> bool {
        let s = s.as_bytes();
        if s.len() > self.k || &self.b[self.k - s.len()..self.k] != s {
            return false;
        }
        self.j = self.k - s.len();
        true
    }

    /// Replace `b[j..k]` with `s`.
    fn set_to(&mut self, s: &str) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(s.as_bytes());
        self.k = self.b.len();
    }

    /// `set_to` when `m() > 0`.
    fn replace(&mut self, s: &str) {
        if self.m() > 0 {
            self.set_to(s);
        }
    }

    /// Plurals and -ed / -ing.
    fn step1ab(&mut self) {
        if self.b[self.k - 1] == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b[self.k - 2] != b's' {
                self.k -= 1;
            }
        }
        self.b.truncate(self.k);

        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            self.b.truncate(self.k);
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_cons(self.k - 1) {
                if !matches!(self.b[self.k - 1], b'l' | b's' | b'z') {
                    self.k -= 1;
                }
            } else {
                self.j = self.k;
                if self.m() == 1 && self.cvc(self.k - 1) {
                    self.set_to("e");
                }
            }
        }
        self.b.truncate(self.k);
    }

    /// Terminal y to i when there is another vowel in the stem.
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            self.b[self.k - 1] = b'i';
        }
    }

    /// Double suffixes to single ones, for `m() > 0`.
    fn step2(&mut self) {
        if self.k < 2 {
            return;
        }
        let rules: &[(&str, &str)] = match self.b[self.k - 2] {
            b'a' => &[("ational", "ate"), ("tional", "tion")],
            b'c' => &[("enci", "ence"), ("anci", "ance")],
            b'e' => &[("izer", "ize")],
            b'l' => &[
                ("bli", "ble"),
                ("alli", "al"),
                ("entli", "ent"),
                ("eli", "e"),
                ("ousli", "ous"),
            ],
            b'o' => &[("ization", "ize"), ("ation", "ate"), ("ator", "ate")],
            b's' => &[
                ("alism", "al"),
                ("iveness", "ive"),
                ("fulness", "ful"),
                ("ousness", "ous"),
            ],
            b't' => &[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")],
            b'g' => &[("logi", "log")],
            _ => &[],
        };
        self.apply_first(rules);
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        let rules: &[(&str, &str)] = match self.b[self.k - 1] {
            b'e' => &[("icate", "ic"), ("ative", ""), ("alize", "al")],
            b'i' => &[("iciti", "ic")],
            b'l' => &[("ical", "ic"), ("ful", "")],
            b's' => &[("ness", "")],
            _ => &[],
        };
        self.apply_first(rules);
    }

    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, repl) in rules {
            if self.ends(suffix) {
                self.replace(repl);
                return;
            }
        }
    }

    /// Drop -ant, -ence etc. in context `<c>vcvc<v>`, i.e. `m() > 1`.
    fn step4(&mut self) {
        if self.k < 2 {
            return;
        }
        let matched = match self.b[self.k - 2] {
            b'a' => self.ends("al"),
            b'c' => self.ends("ance") || self.ends("ence"),
            b'e' => self.ends("er"),
            b'i' => self.ends("ic"),
            b'l' => self.ends("able") || self.ends("ible"),
            b'n' => {
                self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent")
            }
            b'o' => {
                (self.ends("ion") && self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't'))
                    || self.ends("ou")
            }
            b's' => self.ends("ism"),
            b't' => self.ends("ate") || self.ends("iti"),
            b'u' => self.ends("ous"),
            b'v' => self.ends("ive"),
            b'z' => self.ends("ize"),
            _ => false,
        };
        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Final -e and -ll.
    fn step5(&mut self) {
        self.j = self.k;
        if self.b[self.k - 1] == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 2)) {
                self.k -= 1;
            }
        }
        if self.b[self.k - 1] == b'l' && self.double_cons(self.k - 1) && self.m() > 1 {
            self.k -= 1;
        }
    }

    fn run(mut self) -> String {
        if self.k <= 2 {
            return String::from_utf8_lossy(&self.b).into_owned();
        }
        self.step1ab();
        if self.k > 1 {
            self.step1c();
            self.step2();
            self.step3();
            self.step4();
            self.step5();
        }
        self.b.truncate(self.k);
        String::from_utf8_lossy(&self.b).into_owned()
    }
}

/// Stem a lowercase ASCII word with the Porter algorithm.
///
/// # Example
/// ```
/// use libenglish::stemmer::porter_stem;
///
/// assert_eq!(porter_stem("caresses"), "caress");
/// assert_eq!(porter_stem("relational"), "relat");
/// assert_eq!(porter_stem("is"), "is");
/// ```
pub fn porter_stem(word: &str) -> String {
    if !word.bytes().all(|b| b.is_ascii_lowercase()) {
        return word.to_string();
    }
    Stemmer::new(word).run()
}

/// Stem arbitrary input as American English.
///
/// Everything except ASCII letters is dropped (so `"hi there"` is stemmed as
/// `"hithere"`), the rest is lowercased and passed to `porter_stem`.
pub fn american_english_stem(s: &str) -> String {
    let word: String = s
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    porter_stem(&word)
}
