//! Command line arguments for the `subnet-calc` binary.

use clap::Parser;

/// What the user asked for on the command line.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "subnet-calc")]
#[command(about = "Prints network, broadcast, netmask, host range and host count for each CIDR.")]
#[command(after_help = "Environment:
  SUBNET_CALC_OUTPUT      csv (default) or json
  SUBNET_CALC_LOG_CONFIG  log4rs YAML file (default log4rs.yml)")]
pub struct Invocation {
    /// Address to check against every CIDR, may be repeated
    #[arg(short = 'm', long = "member", value_name = "ADDR")]
    pub members: Vec<String>,

    /// Subnets as A.B.C.D/N, a bare address is a /32
    #[arg(required = true, value_name = "CIDR")]
    pub cidrs: Vec<String>,
}

impl Invocation {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
