//! Клиентская пагинация: вся (отфильтрованная сервером) коллекция держится
//! в памяти, экран показывает срез текущей страницы.

/// Размер страницы списка товаров. Компилтайм-константа, настройки нет.
pub const PAGE_SIZE: usize = 10;

/// `ceil(len / page_size)`, но не меньше 1: пустая коллекция рисует
/// одну (пустую) страницу, а не ноль.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Зажимает номер страницы в `[1, total_pages]` после обновления коллекции.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, total_pages(len, page_size))
}

/// Срез `[(page-1)*page_size, page*page_size)`. Выход за границы
/// молча зажимается, среза отрицательной длины не бывает.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        // degenerate page size never divides by zero
        assert_eq!(total_pages(25, 0), 1);
    }

    #[test]
    fn test_page_slice_lengths() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
        assert_eq!(page_slice(&items, 2, 10).len(), 10);
        assert_eq!(page_slice(&items, 3, 10).len(), 5);
        assert_eq!(page_slice(&items, 3, 10), &items[20..25]);
    }

    #[test]
    fn test_page_slice_clamps_out_of_range() {
        let items: Vec<usize> = (0..5).collect();
        assert!(page_slice(&items, 99, 10).is_empty());
        assert_eq!(page_slice(&items, 0, 10).len(), 5);
        let empty: Vec<usize> = Vec::new();
        assert!(page_slice(&empty, 1, 10).is_empty());
    }

    #[test]
    fn test_slice_length_property() {
        let items: Vec<usize> = (0..37).collect();
        let page_size = 10;
        for page in 1..=total_pages(items.len(), page_size) {
            let expected = page_size.min(items.len() - (page - 1) * page_size);
            assert_eq!(page_slice(&items, page, page_size).len(), expected);
        }
    }

    #[test]
    fn test_clamp_page_after_shrink() {
        // page 3 was valid for 25 items; after the collection shrinks to 12
        // the page is clamped back into range
        assert_eq!(clamp_page(3, 25, 10), 3);
        assert_eq!(clamp_page(3, 12, 10), 2);
        assert_eq!(clamp_page(3, 0, 10), 1);
    }
}
