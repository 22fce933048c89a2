use std::error::Error;

use arm_kinematics::report::{format_jacobian, format_joint_angles, format_pose, format_transform};
use arm_kinematics::{ArmKinematics, CartesianPose, JointAngles, LinkGeometry, TransformChain};
use tracing::{error, info};

const USAGE: &str = "usage:
  arm_kinematics                      run the demo
  arm_kinematics fk <t0> <t1> <t2> <t3> <t4>
  arm_kinematics jacobian <t0> <t1> <t2> <t3> <t4>
  arm_kinematics ik <x> <y> <z>

angles in radians, positions in metres;
set ARM_GEOMETRY_PATH to load a JSON link geometry";

fn parse_values<const N: usize>(args: &[String]) -> Result<[f64; N], Box<dyn Error + Send + Sync>> {
    if args.len() != N {
        return Err(format!("expected {} numbers, got {}\n\n{}", N, args.len(), USAGE).into());
    }
    let mut values = [0.0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = arg
            .parse()
            .map_err(|e| format!("'{}' is not a number: {}", arg, e))?;
    }
    Ok(values)
}

fn load_geometry() -> Result<LinkGeometry, Box<dyn Error + Send + Sync>> {
    match std::env::var("ARM_GEOMETRY_PATH") {
        Ok(path) => {
            let geometry = LinkGeometry::from_json_file(&path)?;
            info!("Loaded link geometry from {}", path);
            Ok(geometry)
        }
        Err(_) => Ok(LinkGeometry::default()),
    }
}

fn run_demo(kin: &ArmKinematics<TransformChain>) -> Result<(), Box<dyn Error + Send + Sync>> {
    // Tool pointing down, elbow bent
    let joints = JointAngles::new(0.3, 0.4, 0.5, std::f64::consts::FRAC_PI_2 - 0.9, 0.0);
    info!(?joints, "demo configuration");

    print!("{}", format_joint_angles(&joints));
    let (pose, jacobian) = kin.forward_with_jacobian(&joints);
    print!("{}", format_transform(&kin.tool_transform(&joints)));
    print!("{}", format_pose(&pose));
    print!("{}", format_jacobian(&jacobian));

    for (configuration, solution) in kin.inverse_kinematics_all(&pose) {
        println!("{:?} / {:?}", configuration.reach, configuration.elbow);
        print!("{}", format_joint_angles(&solution));
    }
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn Error + Send + Sync>> {
    let kin = ArmKinematics::with_strategy(load_geometry()?, TransformChain);

    match args.first().map(String::as_str) {
        None => run_demo(&kin),
        Some("fk") => {
            let joints = JointAngles::from_array(parse_values::<5>(&args[1..])?);
            print!("{}", format_pose(&kin.forward_kinematics(&joints)));
            Ok(())
        }
        Some("jacobian") => {
            let joints = JointAngles::from_array(parse_values::<5>(&args[1..])?);
            print!("{}", format_jacobian(&kin.jacobian(&joints)));
            Ok(())
        }
        Some("ik") => {
            let [x, y, z] = parse_values::<3>(&args[1..])?;
            let solution = kin.inverse_kinematics(&CartesianPose::new(x, y, z))?;
            print!("{}", format_joint_angles(&solution));
            Ok(())
        }
        Some(other) => Err(format!("unknown command '{}'\n\n{}", other, USAGE).into()),
    }
}

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}
