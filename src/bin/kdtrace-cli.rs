//! The `kdtrace-cli` driver binary: loads or generates a triangle mesh,
//! builds a `kdtrace::Tree` over it, and fires ray(s) at it. OBJ loading,
//! random geometry generation, timing, and pretty-printing all live here,
//! well away from the library's core: plain `println!` plus a small
//! `timeit`/`pretty_duration` pair, no logging framework.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};

use rand::Rng;

use kdtrace::{build_from_indexed_mesh, build_from_triangle_soup, Ray, Tree, Vector3};

fn main() {
    let cfg = kdtrace::cli::parse_matches(kdtrace::cli::build_app().get_matches());

    let (tree, build_time) = timeit("building k-d tree", || load_or_generate(&cfg));

    println!(
        "[{}] built tree ({} nodes)",
        pretty_duration(build_time),
        tree.statistics().node_count
    );
    if cfg.verbose {
        let stats = tree.statistics();
        println!(
            "max_depth={} min_leaf_depth={} node_count={} max_triangles_per_point={}",
            stats.max_depth, stats.min_leaf_depth, stats.node_count, stats.max_triangles_per_point
        );
    }

    if cfg.interactive {
        run_interactive(&tree, &cfg);
    } else {
        let ray = random_ray(cfg.point_range);
        if cfg.verbose {
            println!("ray origin: {:?} direction: {:?}", ray.origin, ray.direction);
        }
        let (hit, cast_time) = timeit("casting ray", || tree.raycast(&ray));
        print_hit(hit);
        println!("raycast time: {}", pretty_duration(cast_time));
    }
}

fn load_or_generate(cfg: &kdtrace::cli::Config) -> Tree {
    match &cfg.input_file {
        Some(path) => load_obj(path, cfg),
        None => generate_random_mesh(cfg.triangle_count, cfg.point_range),
    }
}

fn load_obj(path: &Path, cfg: &kdtrace::cli::Config) -> Tree {
    println!("loading file: {}", path.display());
    let reader = BufReader::new(File::open(path).expect("could not open OBJ file"));
    let mesh: obj::Obj<obj::Position> =
        obj::load_obj(reader).expect("could not parse OBJ file");

    if cfg.verbose {
        println!(
            "vertices: {} indices: {}",
            mesh.vertices.len(),
            mesh.indices.len()
        );
    }

    let mut vertices = Vec::with_capacity(mesh.vertices.len() * 3);
    for v in &mesh.vertices {
        vertices.extend_from_slice(&v.position);
    }
    let indices: Vec<u32> = mesh.indices.iter().map(|&i| i as u32).collect();

    if cfg.force_soup {
        let soup: Vec<f32> = indices
            .iter()
            .flat_map(|&i| {
                let base = i as usize * 3;
                vertices[base..base + 3].to_vec()
            })
            .collect();
        build_from_triangle_soup(&soup).expect("generated soup buffer is malformed")
    } else {
        build_from_indexed_mesh(&vertices, &indices).expect("OBJ file produced an invalid mesh")
    }
}

fn generate_random_mesh(triangle_count: u32, range: f32) -> Tree {
    let mut rng = rand::thread_rng();
    let mut vertices = Vec::with_capacity(triangle_count as usize * 9);
    for _ in 0..triangle_count * 9 {
        vertices.push(rng.gen_range(0.0..range));
    }
    build_from_triangle_soup(&vertices).expect("generated vertex buffer is malformed")
}

fn random_ray(origin_range: f32) -> Ray {
    let mut rng = rand::thread_rng();
    let origin = Vector3::new(
        rng.gen_range(0.0..origin_range),
        rng.gen_range(0.0..origin_range),
        rng.gen_range(0.0..origin_range),
    );
    let direction = Vector3::new(
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    );
    Ray::new(origin, direction, 1000.0)
}

fn run_interactive(tree: &Tree, cfg: &kdtrace::cli::Config) {
    println!("interaction enabled!");
    println!("shoot rays as '<ox>,<oy>,<oz>;<dx>,<dy>,<dz>', or 'r' for a random ray.");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        let ray = if line == "r" {
            random_ray(cfg.point_range)
        } else {
            match parse_ray(line) {
                Some(r) => r,
                None => {
                    println!("could not parse ray, expected '<ox>,<oy>,<oz>;<dx>,<dy>,<dz>'");
                    continue;
                }
            }
        };
        let (hit, cast_time) = timeit("casting ray", || tree.raycast(&ray));
        print_hit(hit);
        println!("raycast time: {}", pretty_duration(cast_time));
    }
}

fn parse_ray(line: &str) -> Option<Ray> {
    let mut halves = line.splitn(2, ';');
    let origin = parse_triple(halves.next()?)?;
    let direction = parse_triple(halves.next()?)?;
    Some(Ray::new(origin, direction, 1000.0))
}

fn parse_triple(s: &str) -> Option<Vector3<f32>> {
    let mut parts = s.split(',').map(|p| p.trim().parse::<f32>());
    let x = parts.next()?.ok()?;
    let y = parts.next()?.ok()?;
    let z = parts.next()?.ok()?;
    Some(Vector3::new(x, y, z))
}

fn print_hit(hit: Option<kdtrace::RayHit>) {
    match hit {
        Some(hit) => println!("hit at: {:?} (distance {:.4})", hit.position, hit.distance),
        None => println!("nothing hit!"),
    }
}

fn pretty_duration(d: Duration) -> String {
    if d.as_secs() > 0 {
        let secs = d.as_secs() as f64 + f64::from(d.subsec_nanos()) * 1e-9;
        return format!("{:>6.2}s ", secs);
    }
    let ns = d.subsec_nanos();
    if ns > 1_000_000 {
        format!("{:>6.2}ms", f64::from(ns) / 1e6)
    } else if ns > 1_000 {
        format!("{:>6.2}\u{b5}s", f64::from(ns) / 1e3)
    } else {
        format!("{:>6}ns", ns)
    }
}

fn timeit<T, F>(description: &str, f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let t0 = Instant::now();
    let result = f();
    let t = Instant::now() - t0;
    println!("[{}] {}", pretty_duration(t), description);
    (result, t)
}
