use std::f64::consts::FRAC_PI_2;

use arm_kinematics::{
    forward_kinematics, inverse_kinematics, ArmConfiguration, ArmKinematics, CartesianPose, Elbow,
    JointAngles, KinematicsError, LinkGeometry, Reach, TransformChain,
};

/// Joint angles with the tool pointing straight down.
fn tool_down(base: f64, shoulder: f64, elbow: f64) -> JointAngles {
    JointAngles::new(base, shoulder, elbow, FRAC_PI_2 - shoulder - elbow, 0.0)
}

fn assert_reaches(solution: &JointAngles, target: &CartesianPose, geometry: &LinkGeometry) {
    let reached = forward_kinematics(solution, geometry);
    assert!(
        reached.distance_to(target) < 1e-9,
        "target ({:.6}, {:.6}, {:.6}) missed by {:e}",
        target.x,
        target.y,
        target.z,
        reached.distance_to(target)
    );
}

#[test]
fn test_roundtrip_over_grid() {
    let g = LinkGeometry::desktop_arm();

    for &base in &[-2.5, -1.0, 0.0, 0.7, 2.0, 3.0] {
        for &shoulder in &[-0.6, -0.2, 0.3, 0.7] {
            for &elbow in &[-0.8, -0.3, 0.2, 0.6] {
                let original = tool_down(base, shoulder, elbow);
                let target = forward_kinematics(&original, &g);

                let solved = inverse_kinematics(&target, &g).unwrap_or_else(|e| {
                    panic!("no solution for {:?}: {}", original, e)
                });
                assert_reaches(&solved, &target, &g);
            }
        }
    }
}

#[test]
fn test_roundtrip_with_transform_chain_strategy() {
    let g = LinkGeometry::desktop_arm();
    let kin = ArmKinematics::with_strategy(g, TransformChain);

    let original = tool_down(-1.3, 0.1, 0.9);
    let target = kin.forward_kinematics(&original);
    let solved = kin.inverse_kinematics(&target).unwrap();

    assert!(kin.forward_kinematics(&solved).distance_to(&target) < 1e-9);
}

#[test]
fn test_elbow_up_and_down_branches() {
    let g = LinkGeometry::desktop_arm();
    let kin = ArmKinematics::new(g);

    let original = tool_down(0.5, 0.2, 0.7);
    let target = kin.forward_kinematics(&original);

    let up = kin
        .inverse_kinematics_with(&target, ArmConfiguration::new(Reach::Front, Elbow::Up))
        .unwrap();
    let down = kin
        .inverse_kinematics_with(&target, ArmConfiguration::new(Reach::Front, Elbow::Down))
        .unwrap();

    // Elbow up recovers the original configuration
    assert!(up.elbow >= 0.0);
    assert!((up.elbow - 0.7).abs() < 1e-9);
    assert!((up.shoulder - 0.2).abs() < 1e-9);

    // Elbow down mirrors it about the shoulder-wrist line
    assert!(down.elbow < 0.0);
    assert!((down.elbow + 0.7).abs() < 1e-9);
    assert!(down.shoulder > up.shoulder);

    // Same base, both land on the target
    assert!((up.base - down.base).abs() < 1e-12);
    assert_reaches(&up, &target, &g);
    assert_reaches(&down, &target, &g);
}

#[test]
fn test_elbow_down_pose_recovered_with_down_branch() {
    let g = LinkGeometry::desktop_arm();
    let kin = ArmKinematics::new(g);

    let original = tool_down(-0.8, 0.6, -0.5);
    let target = kin.forward_kinematics(&original);

    let down = kin
        .inverse_kinematics_with(&target, ArmConfiguration::new(Reach::Front, Elbow::Down))
        .unwrap();
    assert!((down.elbow - original.elbow).abs() < 1e-9);
    assert!((down.shoulder - original.shoulder).abs() < 1e-9);
    assert!((down.wrist_pitch - original.wrist_pitch).abs() < 1e-9);
}

#[test]
fn test_solve_all_returns_both_elbows() {
    let g = LinkGeometry::desktop_arm();
    let kin = ArmKinematics::new(g);
    let target = kin.forward_kinematics(&tool_down(1.1, 0.3, 0.4));

    let solutions = kin.inverse_kinematics_all(&target);
    let front: Vec<_> = solutions.iter().filter(|(c, _)| c.reach == Reach::Front).collect();
    assert_eq!(front.len(), 2);
    assert!(front.iter().any(|(c, s)| c.elbow == Elbow::Up && s.elbow >= 0.0));
    assert!(front.iter().any(|(c, s)| c.elbow == Elbow::Down && s.elbow < 0.0));

    for (_, solution) in &solutions {
        assert_reaches(solution, &target, &g);
    }
}

#[test]
fn test_unreachable_pose_is_rejected() {
    let g = LinkGeometry::desktop_arm();

    for target in [
        CartesianPose::new(2.0, 0.3, 0.5),
        CartesianPose::new(0.0, 1.0, 0.25),
        CartesianPose::new(0.1, 0.1, 1.5),
    ] {
        match inverse_kinematics(&target, &g) {
            Err(KinematicsError::UnreachablePose(_)) => {}
            other => panic!("expected UnreachablePose for {:?}, got {:?}", target, other),
        }
    }

    let kin = ArmKinematics::new(g);
    assert!(kin.inverse_kinematics_all(&CartesianPose::new(2.0, 0.3, 0.5)).is_empty());
}

#[test]
fn test_full_extension_is_clamped_not_nan() {
    let g = LinkGeometry::desktop_arm();

    // Upper arm and forearm in line: the elbow ratio sits right on 1
    let original = tool_down(0.2, 0.3, 0.0);
    let target = forward_kinematics(&original, &g);

    let solved = inverse_kinematics(&target, &g).unwrap();
    assert!(solved.to_array().iter().all(|a| a.is_finite()));
    assert!(solved.elbow.abs() < 1e-6);
    assert_reaches(&solved, &target, &g);
}

#[test]
fn test_hair_beyond_full_extension_still_solves() {
    let g = LinkGeometry::desktop_arm();
    let base = 0.2;
    let original = tool_down(base, 0.3, 0.0);
    let target = forward_kinematics(&original, &g);

    // Push the target 1 nm further out along the arm direction
    let nudged = CartesianPose::new(
        target.x + 1e-9 * 0.3_f64.cos() * base.cos(),
        target.y + 1e-9 * 0.3_f64.cos() * base.sin(),
        target.z - 1e-9 * 0.3_f64.sin(),
    );

    let solved = inverse_kinematics(&nudged, &g).unwrap();
    assert!(solved.to_array().iter().all(|a| a.is_finite()));
    assert!(solved.elbow.abs() < 1e-3);
    assert!(forward_kinematics(&solved, &g).distance_to(&nudged) < 1e-8);
}

#[test]
fn test_degenerate_bearing_on_y_axis() {
    let g = LinkGeometry::desktop_arm();
    let alpha = (g.lateral_offset() / 0.25).asin();

    let left = CartesianPose::new(0.0, 0.25, 0.1);
    let solved = inverse_kinematics(&left, &g).unwrap();
    assert!((solved.base - (FRAC_PI_2 - alpha)).abs() < 1e-12);
    assert_reaches(&solved, &left, &g);

    let right = CartesianPose::new(0.0, -0.25, 0.1);
    let solved = inverse_kinematics(&right, &g).unwrap();
    assert!((solved.base - (-FRAC_PI_2 - alpha)).abs() < 1e-12);
    assert_reaches(&solved, &right, &g);
}

#[test]
fn test_target_on_base_axis_is_degenerate() {
    let g = LinkGeometry::desktop_arm();
    let err = inverse_kinematics(&CartesianPose::new(0.0, 0.0, 0.2), &g).unwrap_err();
    assert_eq!(err, KinematicsError::DegenerateBearing);
}

#[test]
fn test_targets_behind_the_base() {
    let g = LinkGeometry::desktop_arm();

    // x < 0 in every quadrant combination; the bearing must follow atan2
    for &base in &[2.2, -2.2, 3.0, -3.0] {
        let original = tool_down(base, 0.1, 0.5);
        let target = forward_kinematics(&original, &g);
        assert!(target.x < 0.0);

        let solved = inverse_kinematics(&target, &g).unwrap();
        assert_reaches(&solved, &target, &g);
    }
}

#[test]
fn test_solvers_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LinkGeometry>();
    assert_send_sync::<ArmKinematics>();
    assert_send_sync::<KinematicsError>();

    let g = LinkGeometry::desktop_arm();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let g = &g;
                scope.spawn(move || {
                    let original = tool_down(-1.0 + 0.5 * i as f64, 0.2, 0.4);
                    let target = forward_kinematics(&original, g);
                    let solved = inverse_kinematics(&target, g).unwrap();
                    forward_kinematics(&solved, g).distance_to(&target)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap() < 1e-9);
        }
    });
}
