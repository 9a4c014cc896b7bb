/// Every size-`k` subsequence of `items`, in increasing index-tuple order.
///
/// Each combination keeps the relative order of `items`. `k > items.len()`
/// yields no combinations; `k == 0` yields a single empty one.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut output = Vec::new();
    if k > items.len() {
        return output;
    }

    let mut current = Vec::with_capacity(k);
    backtrack(items, k, 0, &mut current, &mut output);
    output
}

fn backtrack<T: Clone>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    output: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        // 複製目前的組合，之後 current 還會被修改
        output.push(current.clone());
        return;
    }

    // 剩下的位置不夠填滿 k 個就不用再往下
    let remaining = k - current.len();
    for i in start..=items.len() - remaining {
        current.push(items[i].clone());
        backtrack(items, k, i + 1, current, output);
        current.pop();
    }
}

/// C(n, k)
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u64 = 1;
    for i in 0..k {
        // 每一步都能整除
        acc = acc * (n - i) as u64 / (i + 1) as u64;
    }
    acc
}
