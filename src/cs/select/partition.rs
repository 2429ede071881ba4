use rand::Rng;

/// Lomuto partition of `buf[left..=right]` around the pivot stored at `right`.
///
/// Elements `<= pivot` end up before the returned index, larger ones after it,
/// and the pivot itself sits at the returned index, which is its final sorted
/// position within the range.
///
/// # Panics
/// If `left > right` or `right >= buf.len()`. Callers check the range first.
pub fn partition<T: Ord + Copy>(buf: &mut [T], left: usize, right: usize) -> usize {
    let pivot = buf[right];
    let mut i = left;
    for j in left..right {
        if buf[j] <= pivot {
            buf.swap(i, j);
            i += 1;
        }
    }
    buf.swap(i, right);
    i
}

/// Picks a pivot uniformly from `left..=right`, moves it to `right` and partitions.
pub fn randomized_partition<T, R>(buf: &mut [T], left: usize, right: usize, rng: &mut R) -> usize
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    let pivot_index = rng.gen_range(left..=right);
    buf.swap(pivot_index, right);
    partition(buf, left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn assert_partitioned(buf: &[i64], left: usize, right: usize, p: usize) {
        assert!(left <= p && p <= right);
        for &x in &buf[left..p] {
            assert!(x <= buf[p]);
        }
        for &x in &buf[p + 1..=right] {
            assert!(x > buf[p]);
        }
    }

    #[test]
    fn test_partition_places_last_element() {
        let mut buf = [7, 2, 9, 4, 5];
        let p = partition(&mut buf, 0, 4);
        assert_eq!(p, 2);
        assert_eq!(buf[p], 5);
        assert_partitioned(&buf, 0, 4, p);
    }

    #[test]
    fn test_partition_duplicates_go_left() {
        let mut buf = [3, 3, 3];
        let p = partition(&mut buf, 0, 2);
        assert_eq!(p, 2);
    }

    #[test]
    fn test_partition_subrange_leaves_outside_untouched() {
        let mut buf = [100, 8, 1, 6, 3, -100];
        let p = partition(&mut buf, 1, 4);
        assert_eq!(buf[0], 100);
        assert_eq!(buf[5], -100);
        assert_eq!(buf[p], 3);
        assert_partitioned(&buf, 1, 4, p);
    }

    #[test]
    fn test_randomized_partition_single_element() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut buf = [42];
        assert_eq!(randomized_partition(&mut buf, 0, 0, &mut rng), 0);
    }

    #[test]
    fn test_randomized_partition_invariant() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..50 {
            let mut buf: Vec<i64> = (0..20).map(|_| rng.gen_range(-10..10)).collect();
            let p = randomized_partition(&mut buf, 0, 19, &mut rng);
            assert_partitioned(&buf, 0, 19, p);
        }
    }
}
