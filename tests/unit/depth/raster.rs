use super::*;

fn checkerboard(width: u32, height: u32) -> DepthRaster {
    let mut texels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let occupied = (x + y) % 2 == 0;
            texels.push(DepthTexel {
                depth: if occupied { 0.5 } else { 0.0 },
                occupied,
            });
        }
    }
    DepthRaster::from_texels(width, height, texels)
}

#[test]
fn get_clamps_to_edge() {
    let r = checkerboard(4, 3);
    assert_eq!(r.get(-10, -10), r.get(0, 0));
    assert_eq!(r.get(100, 1), r.get(3, 1));
    assert_eq!(r.get(2, 100), r.get(2, 2));
}

#[test]
fn empty_raster_reads_all_clear() {
    let r = DepthRaster::new(0, 0);
    assert!(r.is_empty());
    assert_eq!(r.get(5, 5), DepthTexel::default());
    assert_eq!(r.occupied_ratio(), 0.0);
}

#[test]
fn occupied_ratio_counts_flags_only() {
    let r = checkerboard(2, 2);
    assert_eq!(r.occupied_ratio(), 0.5);
}

#[test]
fn fingerprint_tracks_content() {
    let a = checkerboard(4, 4);
    let b = checkerboard(4, 4);
    assert_eq!(a.fingerprint(), b.fingerprint());

    let mut texels = vec![DepthTexel::default(); 16];
    texels[5] = DepthTexel {
        depth: 0.5,
        occupied: true,
    };
    let c = DepthRaster::from_texels(4, 4, texels);
    assert_ne!(a.fingerprint(), c.fingerprint());
}

#[test]
fn preview_encodes_depth_and_occupancy() {
    let r = DepthRaster::from_texels(
        2,
        1,
        vec![
            DepthTexel {
                depth: 0.4,
                occupied: true,
            },
            DepthTexel::default(),
        ],
    );
    let preview = r.preview_rgba8();
    assert_eq!(preview.len(), 8);
    assert_eq!(preview[0], 102); // 0.4 * 255
    assert_eq!(preview[1], 255);
    assert_eq!(preview[4], 0);
    assert_eq!(preview[5], 0);
    assert_eq!(preview[3], 255);
}
