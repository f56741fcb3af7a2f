// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use clap::Parser;
use hmacurl::{build_context, exit_code, run, Args};
use log::LevelFilter;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if args.debug {
        logger.filter_module("hmacurl", LevelFilter::Debug);
    }
    logger.init();

    let result = match build_context(&args) {
        Ok(ctx) => run(&ctx, &args, &mut std::io::stdout()).await,
        Err(err) => Err(err),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        if let Some(source) = std::error::Error::source(&err) {
            eprintln!("Caused by: {source}");
        }
        process::exit(exit_code(&err));
    }
}
