//! The field of integers modulo 7, built by hand and from the preset

use boring_algebra::cayley;
use boring_algebra::prelude::*;
use boring_algebra::utils;

fn invert(m: &i64) -> i64 {
    match m {
        1 => 1,
        2 => 4,
        3 => 5,
        4 => 2,
        5 => 3,
        6 => 6,
        _ => 0,
    }
}

fn main() -> Result<()> {
    println!("=== Finite field of seven elements ===\n");

    // 1. Built from operations on representations
    let fmod7 = Field::new(
        |m: &i64, n: &i64| (m + n) % 7,
        |m: &i64, n: &i64| (m * n) % 7,
        1,
        0,
        |m: &i64| (7 - m) % 7,
        invert,
    )
    .with_narrow(|m| m.rem_euclid(7));

    let two = fmod7.element(2);
    let three = fmod7.element(3);
    let four = fmod7.element(4);
    let five = fmod7.element(5);
    let six = fmod7.element(6);

    println!("1. Arithmetic");
    println!("   3 * 4 = {}", &three * &four);
    println!("   6 - 2 = {}", &six - &two);
    println!("   -5 = {}", -&five);
    println!("   2^-3 = {}", two.pow(-3)?);
    println!("   4 * 5 = {}", 4 * &five);
    println!("   -1 is 6: {}", fmod7.element(-1).is(&six));
    match fmod7.zero_element().inverse() {
        Ok(inverse) => println!("   1/0 = {inverse}"),
        Err(err) => println!("   1/0: {err}"),
    }

    // 2. Contract checks over every residue
    println!("\n2. Field laws");
    let report = LawChecker::new(fmod7.clone(), 0..7).field();
    println!("   {report}");

    // 3. The multiplicative group is cyclic, generated by 3
    println!("\n3. Multiplicative group");
    for rep in 1..7 {
        let x = fmod7.element(rep);
        let order = cayley::order(&x, 6).unwrap_or(0);
        println!("   order of {x} is {order}");
    }
    let units = cayley::generate(&fmod7, &[three.clone()], 6)?;
    let reps: Vec<i64> = units.iter().map(|x| *x.rep()).collect();
    println!("   powers of 3: {reps:?}");
    let graph = cayley::cayley_graph(&fmod7, &[three], 6)?;
    println!(
        "   Cayley graph: {} nodes, {} edges, strongly connected: {}",
        graph.len(),
        graph.graph().edge_count(),
        graph.is_strongly_connected()
    );

    // 4. Same field from the preset, tables persisted as JSON
    println!("\n4. Preset");
    let f7 = presets::integers_mod_prime(7)?;
    LawChecker::new(f7.clone(), 0..7).field().ensure()?;
    let path = std::env::temp_dir().join("mod7_elements.json");
    utils::save_representations(&fmod7, &path)?;
    let reloaded = utils::load_representations(&f7, &path)?;
    println!("   reloaded {} elements into the preset field", reloaded.len());
    println!("   the two fields share no elements: {}", !reloaded[0].belongs_to(&fmod7));
    std::fs::remove_file(&path)?;

    Ok(())
}
