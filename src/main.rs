//! Suhwa - 수어 제스처 레이블을 한글 문장으로 조합
//!
//! 표준 입력에서 공백으로 구분된 레이블을 읽어 조합 결과를 출력합니다.
//! `--frames`를 주면 각 레이블을 프레임 예측으로 보고 안정화를 거칩니다.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use clap::Parser;

use suhwa::config::{load_config, load_config_from};
use suhwa::{LabelStabilizer, Transcriber, Update};

/// 워커 스레드가 처리할 작업 항목
enum WorkItem {
    /// 확정된 레이블
    Label(String),
    /// 입력 종료 (남은 문장 확정)
    Finish,
}

#[derive(Parser, Debug)]
#[command(name = "suhwa", version, about = "수어 제스처 레이블을 한글 문장으로 조합")]
struct Args {
    /// 입력 레이블을 프레임 예측으로 보고 안정화를 거침
    #[arg(long)]
    frames: bool,

    /// 설정 파일 경로 (기본: $XDG_CONFIG_HOME/suhwa/config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// 입력 레이블을 워커로 전달하고 마지막에 종료 항목을 보냄
/// 워커가 먼저 종료되어 전달에 실패하면 false
fn forward_labels<R: BufRead>(
    input: R,
    mut stabilizer: Option<LabelStabilizer>,
    work_tx: &mpsc::Sender<WorkItem>,
) -> bool {
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("입력 읽기 실패: {}", e);
                break;
            }
        };
        for label in line.split_whitespace() {
            let label = match stabilizer.as_mut() {
                Some(stabilizer) => match stabilizer.push(label, Instant::now()) {
                    Some(label) => label,
                    None => continue,
                },
                None => label.to_string(),
            };
            if work_tx.send(WorkItem::Label(label)).is_err() {
                log::error!("워커 스레드가 종료됨");
                return false;
            }
        }
    }
    if work_tx.send(WorkItem::Finish).is_err() {
        log::error!("워커 스레드가 종료됨 (입력 종료 전달 실패)");
        return false;
    }
    true
}

fn main() {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    // 설정 로드
    let config = match &args.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    // 조합기는 워커 스레드 하나만 소유 (입력 순서대로 직렬 처리)
    let (work_tx, work_rx) = mpsc::channel::<WorkItem>();

    let worker = thread::spawn(move || {
        let mut transcriber = Transcriber::new();

        while let Ok(item) = work_rx.recv() {
            match item {
                WorkItem::Label(label) => match transcriber.feed(&label) {
                    Update::Composing(text) => println!("> {}", text),
                    Update::Committed(text) => println!("{}", text),
                    Update::Ignored => {}
                },
                WorkItem::Finish => {
                    if let Update::Committed(text) = transcriber.commit() {
                        println!("{}", text);
                    }
                    break;
                }
            }
        }
    });

    // 입력 스레드: 표준 입력 -> (안정화) -> 워커
    let frames = args.frames;
    let stabilizer_config = config.stabilizer();
    let reader = thread::spawn(move || {
        let stabilizer = frames.then(|| LabelStabilizer::new(stabilizer_config));
        forward_labels(io::stdin().lock(), stabilizer, &work_tx);
    });

    if reader.join().is_err() {
        log::error!("입력 스레드 비정상 종료");
    }
    if worker.join().is_err() {
        log::error!("워커 스레드 비정상 종료");
    }
}
