use super::*;
use proptest::prelude::*;

/// カテゴリ ID の候補
const CATEGORY_IDS: [&str; 3] = ["rust", "web", "games"];

fn link_strategy() -> impl Strategy<Value = LinkRecord> {
    (
        "[A-Za-z0-9 ]{0,12}",
        proptest::option::of("[a-z ]{0,16}"),
        proptest::sample::subsequence(CATEGORY_IDS.to_vec(), 0..=3),
    )
        .prop_map(|(title, description, categories)| {
            let mut link = LinkRecord::new(title, "https://example.com").with_categories(categories);
            link.description = description;
            link
        })
}

fn category_strategy() -> impl Strategy<Value = CategoryFilter> {
    prop_oneof![
        Just(CategoryFilter::All),
        proptest::sample::select(CATEGORY_IDS.to_vec()).prop_map(CategoryFilter::parse),
    ]
}

fn pager_strategy() -> impl Strategy<Value = PagerConfig> {
    (1usize..40, 0usize..150).prop_map(|(page_size, max_render)| PagerConfig {
        page_size,
        max_render,
    })
}

proptest! {
    /// クランプ後のページは常に [1, total_pages]、total_pages は 1 以上
    #[test]
    fn prop_page_is_always_in_range(
        links in proptest::collection::vec(link_strategy(), 0..120),
        category in category_strategy(),
        search in "[a-z]{0,2}",
        requested in 0usize..50,
        pager in pager_strategy(),
    ) {
        let result = query(&links, &category, &search);
        let page = paginate(&result, requested, pager);

        prop_assert!(page.total_pages >= 1);
        prop_assert!(page.page >= 1);
        prop_assert!(page.page <= page.total_pages);
    }

    /// 件数の不変条件
    #[test]
    fn prop_counts_are_consistent(
        links in proptest::collection::vec(link_strategy(), 0..120),
        category in category_strategy(),
        search in "[a-z]{0,2}",
        requested in 0usize..50,
        pager in pager_strategy(),
    ) {
        let result = query(&links, &category, &search);
        let page = paginate(&result, requested, pager);

        prop_assert!(page.total_matched <= page.total_all);
        prop_assert!(page.total_rendered <= pager.max_render);
        prop_assert!(page.shown() <= pager.page_size);
        if page.page < page.total_pages {
            prop_assert_eq!(page.shown(), pager.page_size);
        }
    }

    /// 全ページを連結するとキャップ後の結果と一致する
    #[test]
    fn prop_pages_partition_capped_result(
        links in proptest::collection::vec(link_strategy(), 0..120),
        pager in pager_strategy(),
    ) {
        let result = query(&links, &CategoryFilter::All, "");
        let total_pages = paginate(&result, 1, pager).total_pages;

        let concatenated: Vec<&LinkRecord> = (1..=total_pages)
            .flat_map(|p| paginate(&result, p, pager).items)
            .collect();
        let capped: Vec<&LinkRecord> = result.records.iter().copied().take(pager.max_render).collect();
        prop_assert_eq!(concatenated, capped);
    }

    /// 絞り込みは冪等
    #[test]
    fn prop_filtering_is_idempotent(
        links in proptest::collection::vec(link_strategy(), 0..60),
        category in category_strategy(),
        search in "[a-z]{0,2}",
    ) {
        let once: Vec<LinkRecord> = filter_and_sort(&links, &category, &search)
            .into_iter()
            .cloned()
            .collect();
        let twice: Vec<LinkRecord> = filter_and_sort(&once, &category, &search)
            .into_iter()
            .cloned()
            .collect();
        prop_assert_eq!(once, twice);
    }

    /// "all" は categories の有無にかかわらず全件を返す
    #[test]
    fn prop_all_category_keeps_everything(
        links in proptest::collection::vec(link_strategy(), 0..60),
    ) {
        let result = query(&links, &CategoryFilter::All, "");
        prop_assert_eq!(result.total_matched(), links.len());
    }

    /// ウィンドウは現在ページと先頭・末尾を含み、昇順で、省略記号は連続しない
    #[test]
    fn prop_window_is_well_formed(total in 1usize..200, current in 1usize..200) {
        let config = WindowConfig::default();
        let current = current.min(total);
        let entries = page_window(total, current, &config);

        let pages: Vec<usize> = entries.iter().filter_map(|e| e.page()).collect();
        prop_assert!(pages.contains(&current));
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(pages.len() <= config.max_visible + 1);
        prop_assert!(entries
            .windows(2)
            .all(|w| !(w[0] == PageEntry::Ellipsis && w[1] == PageEntry::Ellipsis)));
    }

    /// 省略記号は両端に来ず、隣り合うページ番号は連番
    #[test]
    fn prop_ellipsis_sits_between_pages(total in 1usize..200, current in 1usize..200) {
        let entries = page_window(total, current.min(total), &WindowConfig::default());
        prop_assert_ne!(entries.first().copied(), Some(PageEntry::Ellipsis));
        prop_assert_ne!(entries.last().copied(), Some(PageEntry::Ellipsis));
        if total <= WindowConfig::default().max_visible {
            prop_assert!(!entries.contains(&PageEntry::Ellipsis));
        }
        for w in entries.windows(2) {
            if let [PageEntry::Page(a), PageEntry::Page(b)] = w {
                prop_assert_eq!(a + 1, *b);
            }
        }
    }
}

proptest! {
    /// 閾値がどうであれ、現在ページと先頭・末尾を昇順で含む
    #[test]
    fn prop_window_keeps_current_page_for_any_thresholds(
        total in 1usize..60,
        current in 1usize..60,
        max_visible in 0usize..12,
        near_start in 0usize..12,
        near_end in 0usize..12,
        middle_radius in 0usize..6,
    ) {
        let config = WindowConfig { max_visible, near_start, near_end, middle_radius };
        let current = current.min(total);
        let pages: Vec<usize> = page_window(total, current, &config)
            .iter()
            .filter_map(|e| e.page())
            .collect();

        prop_assert!(pages.contains(&current));
        prop_assert_eq!(pages.first().copied(), Some(1));
        prop_assert_eq!(pages.last().copied(), Some(total));
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
    }

    /// 検証を通る閾値ではページ番号が max_visible + 1 個以内
    #[test]
    fn prop_valid_thresholds_bound_the_window(
        total in 1usize..80,
        current in 1usize..80,
        max_visible in 2usize..12,
        near_start in 0usize..12,
        near_end in 0usize..12,
        middle_radius in 0usize..6,
    ) {
        let config = WindowConfig { max_visible, near_start, near_end, middle_radius };
        prop_assume!(config.validate().is_ok());
        let pages = page_window(total, current.min(total), &config)
            .iter()
            .filter(|e| e.page().is_some())
            .count();
        prop_assert!(pages <= max_visible + 1);
    }
}
