//! Suffix array over the concatenation of two code streams
//!
//! The text is laid out as `source + [sentinel_a] + target + [sentinel_b]`.
//! Both sentinels are smaller than any real code and distinct from each other,
//! so no common prefix can run across the boundary between the streams.
//!
//! Construction uses the DC3 (difference cover modulo 3) algorithm of
//! Kärkkäinen, Sanders and Burkhardt; the LCP array is then computed in linear
//! time with the algorithm of Kasai et al.

/// `0` pads the text for DC3, the sentinels come right after it.
const PADDING: usize = 0;
const SENTINEL_A: usize = 1;
const SENTINEL_B: usize = 2;
const CODE_SHIFT: usize = 3;

/// LCP values at or below this length are not worth turning into anchors.
pub const INSIGNIFICANT_LCP: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixArray {
    text: Vec<usize>,
    source_len: usize,
    order: Vec<usize>,
    lcps: Vec<usize>,
    ordered_lcps: Vec<usize>,
}

impl SuffixArray {
    pub fn new(source: &[u32], target: &[u32]) -> Self {
        if source.is_empty() && target.is_empty() {
            return Self {
                text: Vec::new(),
                source_len: 0,
                order: Vec::new(),
                lcps: Vec::new(),
                ordered_lcps: Vec::new(),
            };
        }

        let text = concatenate(source, target);
        let order = suffix_order(&text);
        let lcps = kasai_lcps(&text, &order);
        let ordered_lcps = significant_lcps(&lcps);

        log::trace!(
            "suffix array over {} positions, {} significant LCP values",
            text.len(),
            ordered_lcps.len()
        );

        Self {
            text,
            source_len: source.len(),
            order,
            lcps,
            ordered_lcps,
        }
    }

    /// Number of positions in the concatenated text, sentinels included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Position of the first target token inside the concatenated text.
    pub fn target_offset(&self) -> usize {
        self.source_len + 1
    }

    /// Suffix start positions in lexicographic order of their suffixes.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// `lcps()[i]` is the shared-prefix length of the suffixes at
    /// `order()[i - 1]` and `order()[i]`; `lcps()[0]` is always `0`.
    pub fn lcps(&self) -> &[usize] {
        &self.lcps
    }

    /// LCP values longer than `INSIGNIFICANT_LCP`, sorted ascending.
    pub fn ordered_lcps(&self) -> &[usize] {
        &self.ordered_lcps
    }

    pub fn idx_at(&self, rank: usize) -> usize {
        self.order[rank]
    }

    pub fn lcp_at(&self, rank: usize) -> usize {
        self.lcps[rank]
    }

    /// The concatenated, shifted text the array was built over.
    pub fn text(&self) -> &[usize] {
        &self.text
    }
}

fn concatenate(source: &[u32], target: &[u32]) -> Vec<usize> {
    let mut text = Vec::with_capacity(source.len() + target.len() + 2);
    text.extend(source.iter().map(|&code| code as usize + CODE_SHIFT));
    text.push(SENTINEL_A);
    text.extend(target.iter().map(|&code| code as usize + CODE_SHIFT));
    text.push(SENTINEL_B);
    text
}

fn suffix_order(text: &[usize]) -> Vec<usize> {
    let n = text.len();
    let alphabet = text.iter().copied().max().unwrap_or(PADDING);

    // DC3 reads up to three positions past the end
    let mut padded = Vec::with_capacity(n + 3);
    padded.extend_from_slice(text);
    padded.extend([PADDING; 3]);

    let mut order = vec![0; n];
    dc3(&padded, &mut order, n, alphabet);
    order
}

/// Sorts the suffixes of `s[..n]` into `sa[..n]`.
///
/// `s` must hold `n + 3` values, the last three being `0`, and every value in
/// `s[..n]` must lie in `1..=k`.
fn dc3(s: &[usize], sa: &mut [usize], n: usize, k: usize) {
    let n0 = (n + 2) / 3;
    let n1 = (n + 1) / 3;
    let n2 = n / 3;
    let n02 = n0 + n2;

    let mut s12 = vec![0; n02 + 3];
    let mut sa12 = vec![0; n02 + 3];
    let mut s0 = vec![0; n0];
    let mut sa0 = vec![0; n0];

    // positions of the mod 1 and mod 2 suffixes; `n0 - n1` adds a dummy mod 1
    // suffix when n % 3 == 1
    let mut j = 0;
    for i in 0..(n + n0 - n1) {
        if i % 3 != 0 {
            s12[j] = i;
            j += 1;
        }
    }

    // LSB radix sort of the mod 1 and mod 2 triples
    radix_pass(&s12[..n02], &mut sa12[..n02], s, 2, k);
    radix_pass(&sa12[..n02], &mut s12[..n02], s, 1, k);
    radix_pass(&s12[..n02], &mut sa12[..n02], s, 0, k);

    // lexicographic names of the triples
    let mut name = 0;
    let mut last: Option<(usize, usize, usize)> = None;
    for &pos in &sa12[..n02] {
        let triple = (s[pos], s[pos + 1], s[pos + 2]);
        if last != Some(triple) {
            name += 1;
            last = Some(triple);
        }
        if pos % 3 == 1 {
            s12[pos / 3] = name;
        } else {
            s12[pos / 3 + n0] = name;
        }
    }

    if name < n02 {
        // names are not unique yet: rank the reduced string recursively
        dc3(&s12, &mut sa12, n02, name);
        for (rank, &pos) in sa12[..n02].iter().enumerate() {
            s12[pos] = rank + 1;
        }
    } else {
        for (pos, &rank) in s12[..n02].iter().enumerate() {
            sa12[rank - 1] = pos;
        }
    }

    // stable sort of the mod 0 suffixes by their first character
    let mut j = 0;
    for &pos in &sa12[..n02] {
        if pos < n0 {
            s0[j] = 3 * pos;
            j += 1;
        }
    }
    radix_pass(&s0, &mut sa0, s, 0, k);

    let position_of = |t: usize| {
        if sa12[t] < n0 {
            sa12[t] * 3 + 1
        } else {
            (sa12[t] - n0) * 3 + 2
        }
    };

    // merge the sorted mod 0 suffixes with the sorted mod 1/2 suffixes
    let (mut p, mut t, mut out) = (0, n0 - n1, 0);
    while out < n {
        if t == n02 {
            sa[out] = sa0[p];
            p += 1;
            out += 1;
            continue;
        }
        if p == n0 {
            sa[out] = position_of(t);
            t += 1;
            out += 1;
            continue;
        }

        let i = position_of(t);
        let j = sa0[p];
        let from_s12_is_smaller = if sa12[t] < n0 {
            (s[i], s12[sa12[t] + n0]) <= (s[j], s12[j / 3])
        } else {
            (s[i], s[i + 1], s12[sa12[t] - n0 + 1]) <= (s[j], s[j + 1], s12[j / 3 + n0])
        };

        if from_s12_is_smaller {
            sa[out] = i;
            t += 1;
        } else {
            sa[out] = j;
            p += 1;
        }
        out += 1;
    }
}

/// Stably sorts `from` into `to` keyed by `r[x + offset]`, keys in `0..=k`.
fn radix_pass(from: &[usize], to: &mut [usize], r: &[usize], offset: usize, k: usize) {
    let mut counts = vec![0; k + 1];
    for &x in from {
        counts[r[x + offset]] += 1;
    }

    let mut sum = 0;
    for count in counts.iter_mut() {
        let current = *count;
        *count = sum;
        sum += current;
    }

    for &x in from {
        let key = r[x + offset];
        to[counts[key]] = x;
        counts[key] += 1;
    }
}

/// Kasai's linear-time LCP computation.
fn kasai_lcps(text: &[usize], order: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut rank = vec![0; n];
    for (r, &pos) in order.iter().enumerate() {
        rank[pos] = r;
    }

    let mut lcps = vec![0; n];
    let mut h = 0;
    for i in 0..n {
        let r = rank[i];
        if r == 0 {
            h = 0;
            continue;
        }

        let j = order[r - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcps[r] = h;

        // the next suffix shares at least h - 1 with its predecessor
        h = h.saturating_sub(1);
    }

    lcps
}

fn significant_lcps(lcps: &[usize]) -> Vec<usize> {
    let mut ordered: Vec<usize> = lcps
        .iter()
        .copied()
        .filter(|&lcp| lcp > INSIGNIFICANT_LCP)
        .collect();
    ordered.sort_unstable();
    ordered
}
