use super::*;

// =========================================================
// 辅助函数
// =========================================================

fn meta(page: u32, limit: u32, total: u64, total_pages: u32) -> PaginationMeta {
    PaginationMeta {
        page,
        limit,
        total,
        total_pages,
        has_next_page: page < total_pages,
        has_previous_page: page > 1,
    }
}

fn envelope(rows: Vec<&str>, meta: Option<PaginationMeta>) -> ListEnvelope<String> {
    ListEnvelope {
        data: rows.into_iter().map(String::from).collect(),
        meta,
    }
}

// =========================================================
// 获取计划
// =========================================================

#[test]
fn test_initial_fetch_is_page_one_empty_search() {
    let mut core = ListViewCore::<String>::new(10);
    let spec = core.initial_fetch();

    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 10);
    assert_eq!(spec.search, "");
    assert!(core.loading);
    assert!(core.error.is_none());
}

#[test]
fn test_debounce_burst_plans_single_fetch_with_last_query() {
    // 连续输入 "c" "cl" "cli"，窗口内只有最后一个定时器存活，
    // 因此只有一次 debounce_fire —— 搜索词取最终值，页码回到 1
    let mut core = ListViewCore::<String>::new(10);
    core.set_query("c".to_string());
    core.set_query("cl".to_string());
    core.set_query("cli".to_string());

    let spec = core.debounce_fire();
    assert_eq!(spec.search, "cli");
    assert_eq!(spec.page, 1);
    assert_eq!(spec.seq, 1);
}

#[test]
fn test_debounce_fire_trims_query() {
    let mut core = ListViewCore::<String>::new(10);
    core.set_query("  cli  ".to_string());
    assert_eq!(core.debounce_fire().search, "cli");
}

#[test]
fn test_goto_uses_current_undebounced_query() {
    // 防抖还没落地时点分页：立即获取，搜索词取当前输入值
    let mut core = ListViewCore::<String>::new(10);
    core.set_query("cli".to_string());

    let spec = core.goto(3, 25);
    assert_eq!(spec.page, 3);
    assert_eq!(spec.limit, 25);
    assert_eq!(spec.search, "cli");
}

#[test]
fn test_goto_clamps_to_valid_bounds() {
    let mut core = ListViewCore::<String>::new(10);
    let spec = core.goto(0, 0);
    assert_eq!(spec.page, 1);
    assert_eq!(spec.limit, 1);
}

#[test]
fn test_plan_sets_loading_and_clears_error() {
    let mut core = ListViewCore::<String>::new(10);
    let spec = core.initial_fetch();
    core.apply_failure(&spec, "boom".to_string());
    assert_eq!(core.error.as_deref(), Some("boom"));

    core.goto(1, 10);
    assert!(core.loading);
    assert!(core.error.is_none());
}

// =========================================================
// 响应落地
// =========================================================

#[test]
fn test_apply_success_adopts_meta_verbatim() {
    let mut core = ListViewCore::<String>::new(10);
    let spec = core.initial_fetch();

    let server_meta = meta(2, 10, 25, 3);
    assert!(core.apply_success(&spec, envelope(vec!["a", "b"], Some(server_meta))));

    assert_eq!(core.pagination, server_meta);
    assert_eq!(core.results.len(), 2);
    assert!(!core.loading);
    assert!(core.error.is_none());
}

#[test]
fn test_apply_success_missing_meta_defaults_to_requested() {
    let mut core = ListViewCore::<String>::new(10);
    core.goto(1, 10);
    let spec = core.goto(4, 20);

    assert!(core.apply_success(&spec, envelope(vec!["x"], None)));

    // 页码/页大小回落到请求值，其余字段回落到零值/false
    assert_eq!(core.pagination.page, 4);
    assert_eq!(core.pagination.limit, 20);
    assert_eq!(core.pagination.total, 0);
    assert_eq!(core.pagination.total_pages, 0);
    assert!(!core.pagination.has_next_page);
    assert!(!core.pagination.has_previous_page);
}

#[test]
fn test_apply_failure_empties_results_and_sets_error() {
    let mut core = ListViewCore::<String>::new(10);
    let spec = core.initial_fetch();
    core.apply_success(&spec, envelope(vec!["a"], Some(meta(1, 10, 1, 1))));

    let spec = core.goto(2, 10);
    assert!(core.apply_failure(&spec, "Failed to fetch users".to_string()));

    assert!(core.results.is_empty());
    assert_eq!(core.error.as_deref(), Some("Failed to fetch users"));
    assert!(!core.loading);
}

// =========================================================
// 序号守卫：后发出者胜
// =========================================================

#[test]
fn test_stale_success_is_discarded() {
    let mut core = ListViewCore::<String>::new(10);
    let first = core.initial_fetch();
    let second = core.goto(2, 10);

    // 先发出的响应后到：丢弃
    assert!(!core.apply_success(&first, envelope(vec!["stale"], Some(meta(1, 10, 9, 1)))));
    assert!(core.results.is_empty());
    assert!(core.loading);

    // 最后发出的照常落地
    assert!(core.apply_success(&second, envelope(vec!["fresh"], Some(meta(2, 10, 11, 2)))));
    assert_eq!(core.results, vec!["fresh".to_string()]);
    assert_eq!(core.pagination.page, 2);
}

#[test]
fn test_stale_failure_is_discarded() {
    let mut core = ListViewCore::<String>::new(10);
    let first = core.initial_fetch();
    let second = core.debounce_fire();

    assert!(!core.apply_failure(&first, "old failure".to_string()));
    assert!(core.error.is_none());

    assert!(core.apply_success(&second, envelope(vec!["row"], None)));
    assert_eq!(core.results.len(), 1);
}

#[test]
fn test_sequence_numbers_are_monotonic() {
    let mut core = ListViewCore::<String>::new(10);
    let a = core.initial_fetch();
    let b = core.debounce_fire();
    let c = core.goto(2, 10);
    assert!(a.seq < b.seq && b.seq < c.seq);
}
