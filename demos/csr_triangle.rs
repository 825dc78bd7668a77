use sssp_path::ffi::{sssp_query_csr, SsspQueryInfo};

fn main() {
    // Simple triangle graph 0->1 (1.0), 0->2 (2.0), 1->2 (0.25)
    let n: u32 = 3;
    let offsets: [u32; 4] = [0, 2, 3, 3];
    let targets: [u32; 3] = [1, 2, 2];
    let weights: [f32; 3] = [1.0, 2.0, 0.25];
    let mut dist = 0f32;
    let mut path = vec![0u32; n as usize];
    let mut info = SsspQueryInfo::default();
    let rc = unsafe {
        sssp_query_csr(
            n,
            offsets.as_ptr(),
            targets.as_ptr(),
            weights.as_ptr(),
            0,
            2,
            &mut dist,
            path.as_mut_ptr(),
            path.len() as u32,
            &mut info,
        )
    };
    path.truncate(info.path_len as usize);
    println!("rc={} relax={} settled={} dist={} path={:?}", rc, info.relaxations, info.settled, dist, path);
}
