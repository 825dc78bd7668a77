//! C ABI over CSR arrays with `f32` weights.
//!
//! Return codes: `0` success, `-1` empty graph, `-2` source or target out of
//! range, `-3` null pointer, `-4` malformed CSR or weight, `-5` path buffer
//! too small (the required length is still reported in `info.path_len`).

use core::slice;

use tracing::warn;

use crate::graph::Graph;
use crate::query::QueryResult;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SsspQueryInfo {
    pub relaxations: u64,
    pub settled: u64,
    pub heap_pushes: u64,
    pub heap_pops: u64,
    pub heap_max: u64,
    pub path_len: u32,
    pub error_code: i32,
}

impl SsspQueryInfo {
    fn from_result(result: &QueryResult<f32>, error_code: i32) -> Self {
        let s = result.stats;
        Self {
            relaxations: s.relaxations,
            settled: s.settled,
            heap_pushes: s.heap.pushes,
            heap_pops: s.heap.pops,
            heap_max: s.heap.max_size,
            path_len: result.path.len() as u32,
            error_code,
        }
    }
}

#[no_mangle]
pub extern "C" fn sssp_version() -> u32 {
    1
}

#[inline(always)]
unsafe fn as_slice<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    slice::from_raw_parts(ptr, len)
}

#[inline(always)]
unsafe fn write_info(info: *mut SsspQueryInfo, value: SsspQueryInfo) {
    if !info.is_null() {
        *info = value;
    }
}

/// Shortest distance and path from `source` to `target`.
///
/// Writes the distance to `out_dist` (`f32::INFINITY` when unreachable) and
/// the node sequence to `out_path`. `info` may be null.
///
/// # Safety
///
/// `offsets` must point to `n + 1` values, `targets` and `weights` to
/// `offsets[n]` values each, and `out_path` to `path_capacity` writable
/// slots (it may be null when `path_capacity` is 0).
#[no_mangle]
pub unsafe extern "C" fn sssp_query_csr(
    n: u32,
    offsets: *const u32,
    targets: *const u32,
    weights: *const f32,
    source: u32,
    target: u32,
    out_dist: *mut f32,
    out_path: *mut u32,
    path_capacity: u32,
    info: *mut SsspQueryInfo,
) -> i32 {
    let fail = |code: i32| {
        write_info(info, SsspQueryInfo { error_code: code, ..SsspQueryInfo::default() });
        code
    };
    if n == 0 {
        return fail(-1);
    }
    if source >= n || target >= n {
        return fail(-2);
    }
    if offsets.is_null() || targets.is_null() || weights.is_null() || out_dist.is_null() {
        return fail(-3);
    }
    if out_path.is_null() && path_capacity > 0 {
        return fail(-3);
    }

    let n_usize = n as usize;
    let off = as_slice(offsets, n_usize + 1);
    let m = off[n_usize] as usize;
    let tgt = as_slice(targets, m);
    let wts = as_slice(weights, m);
    let graph = match Graph::<f32>::from_csr(off, tgt, wts) {
        Ok(g) => g,
        Err(e) => {
            warn!(error = %e, "rejected CSR graph");
            return fail(-4);
        }
    };
    let result = match graph.query(source as usize, target as usize) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "query failed");
            return fail(-4);
        }
    };

    *out_dist = result.distance.finite().unwrap_or(f32::INFINITY);
    let len = result.path.len();
    if len > path_capacity as usize {
        write_info(info, SsspQueryInfo::from_result(&result, -5));
        return -5;
    }
    if len > 0 {
        let out = slice::from_raw_parts_mut(out_path, len);
        for (slot, &node) in out.iter_mut().zip(result.path.nodes()) {
            *slot = node as u32;
        }
    }
    write_info(info, SsspQueryInfo::from_result(&result, 0));
    0
}
