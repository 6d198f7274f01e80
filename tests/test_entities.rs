use skyfire::entities::{Blast, Enemy, Hero, SpriteKey};

#[test]
fn enemy_travels_left_and_starts_alive() {
    let e = Enemy::new(1000.0, 120.0);
    assert_eq!(e.speed, -2.0);
    assert_eq!((e.width, e.height), (128.0, 128.0));
    assert_eq!(e.sprite, SpriteKey::Enemy);
    assert!(e.alive);
}

#[test]
fn blast_travels_right_and_starts_alive() {
    let b = Blast::new(500.0, 284.0);
    assert_eq!(b.speed, 10.0);
    assert_eq!((b.width, b.height), (32.0, 32.0));
    assert_eq!(b.sprite, SpriteKey::Blast);
    assert!(b.alive);
}

#[test]
fn hero_contains_points_inside_its_centered_box() {
    let h = Hero::new(500.0, 300.0); // 75 x 65 box
    assert!(h.contains(500.0, 300.0));
    assert!(h.contains(463.0, 300.0)); // inside the left half-width
    assert!(h.contains(500.0, 332.0)); // inside the lower half-height
    assert!(!h.contains(460.0, 300.0));
    assert!(!h.contains(500.0, 334.0));
    assert!(!h.contains(560.0, 360.0));
}
